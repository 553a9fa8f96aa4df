//! Language selection and login screens

use crate::i18n::use_i18n;
use crate::router::Route;
use crate::session::{Credentials, LoginHandler, LoginRequest};
use crate::storage::LocalFlagStore;
use teachers_core::Locale;
use tracing::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LanguageSelectPage)]
pub fn language_select_page() -> Html {
    let i18n = use_i18n();
    let navigator = use_navigator();
    let selected = use_state(|| i18n.locale());

    let on_continue = {
        let i18n = i18n.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            let locale = *selected;
            i18n.set_locale(locale);
            LocalFlagStore.select_language(locale);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <h1 class="text-3xl font-bold mb-2">{i18n.t("language_select.title")}</h1>
                <p class="text-gray-500 mb-6">{i18n.t("language_select.subtitle")}</p>
                <div class="flex flex-col gap-2 mb-6">
                    {for Locale::all().iter().map(|&locale| {
                        let selected = selected.clone();
                        let active = *selected == locale;
                        html! {
                            <button
                                class={classes!("px-4", "py-3", "rounded-lg", "border", active.then_some("border-blue-600"))}
                                onclick={Callback::from(move |_| selected.set(locale))}
                            >
                                {locale.display_name()}
                            </button>
                        }
                    })}
                </div>
                <button class="w-full px-4 py-3 rounded-lg bg-blue-600 text-white" onclick={on_continue}>
                    {i18n.t("language_select.continue")}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    #[prop_or_default]
    pub on_submit: Option<LoginHandler>,
}

/// Login form. The credential exchange belongs to the host's auth client,
/// installed as `on_submit`; its `complete` callback stores the token.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let i18n = use_i18n();
    let navigator = use_navigator();
    let phone = use_node_ref();
    let password = use_node_ref();

    let on_submit = {
        let handler = props.on_submit.clone();
        let phone = phone.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let Some(credentials) = Credentials::new(&value(&phone), &value(&password)) else {
                return;
            };
            let Some(handler) = &handler else {
                warn!("No login handler installed, ignoring submit");
                return;
            };
            let navigator = navigator.clone();
            let complete = Callback::from(move |token: String| {
                LocalFlagStore.login(&token);
                if let Some(navigator) = &navigator {
                    navigator.replace(&Route::Main);
                }
            });
            handler.emit(LoginRequest {
                credentials,
                complete,
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <form class="max-w-md w-full flex flex-col gap-4" onsubmit={on_submit}>
                <h1 class="text-3xl font-bold">{i18n.t("login.title")}</h1>
                <input ref={phone} class="px-4 py-3 rounded-lg border" type="tel" placeholder={i18n.t("login.phone")} />
                <input ref={password} class="px-4 py-3 rounded-lg border" type="password" placeholder={i18n.t("login.password")} />
                <button class="px-4 py-3 rounded-lg bg-blue-600 text-white" type="submit">
                    {i18n.t("login.submit")}
                </button>
            </form>
        </div>
    }
}
