//! Locale context and translation hook

use crate::storage::LocalFlagStore;
use once_cell::sync::Lazy;
use std::rc::Rc;
use teachers_core::{Catalog, Locale};
use tracing::error;
use yew::prelude::*;

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::builtin().unwrap_or_else(|err| {
        error!("Bundled translations are invalid: {err}");
        Catalog::new()
    })
});

#[derive(Clone, Debug, PartialEq)]
pub struct I18nState {
    pub locale: Locale,
}

pub enum I18nAction {
    SetLocale(Locale),
}

impl Reducible for I18nState {
    type Action = I18nAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            I18nAction::SetLocale(locale) => {
                LocalFlagStore.set_locale(locale);
                Rc::new(Self { locale })
            }
        }
    }
}

pub type I18nContext = UseReducerHandle<I18nState>;

/// Translation helper bound to the current locale
#[derive(Clone, PartialEq)]
pub struct Translator {
    context: I18nContext,
}

impl Translator {
    pub fn locale(&self) -> Locale {
        self.context.locale
    }

    pub fn set_locale(&self, locale: Locale) {
        self.context.dispatch(I18nAction::SetLocale(locale));
    }

    pub fn t(&self, key: &str) -> String {
        CATALOG.translate(self.context.locale, key)
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        CATALOG.translate_with(self.context.locale, key, args)
    }
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let state = use_reducer(|| I18nState {
        locale: Locale::from_store(&LocalFlagStore),
    });

    html! {
        <ContextProvider<I18nContext> context={state}>
            {props.children.clone()}
        </ContextProvider<I18nContext>>
    }
}

/// Hook to translate with the current locale
#[hook]
pub fn use_i18n() -> Translator {
    let context = use_context::<I18nContext>()
        .expect("I18nContext not found. Make sure to wrap your component with I18nProvider");
    Translator { context }
}
