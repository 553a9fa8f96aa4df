use crate::i18n::I18nProvider;
use crate::router::AppRouter;
use crate::session::LoginHandler;
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    /// Auth client hook for the login form; without one, submits are ignored
    #[prop_or_default]
    pub on_login: Option<LoginHandler>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <I18nProvider>
            <AppRouter on_login={props.on_login.clone()} />
        </I18nProvider>
    }
}
