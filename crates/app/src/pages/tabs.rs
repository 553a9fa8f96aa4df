//! Tabbed main area

use crate::i18n::use_i18n;
use crate::router::Route;
use crate::storage::LocalFlagStore;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabsPageProps {
    pub children: Children,
}

#[function_component(TabsPage)]
pub fn tabs_page(props: &TabsPageProps) -> Html {
    let i18n = use_i18n();
    let current = use_route::<Route>();

    let tab = |route: Route, key: &str| {
        let active = current.as_ref() == Some(&route);
        html! {
            <Link<Route> to={route} classes={classes!("flex-1", "py-3", "text-center", active.then_some("text-blue-600"))}>
                {i18n.t(key)}
            </Link<Route>>
        }
    };

    html! {
        <div class="h-screen flex flex-col">
            <div class="flex-1 overflow-auto">{props.children.clone()}</div>
            <nav class="flex border-t">
                {tab(Route::Main, "tabs.main")}
                {tab(Route::Wallet, "tabs.wallet")}
                {tab(Route::Profile, "tabs.profile")}
            </nav>
        </div>
    }
}

#[function_component(MainPage)]
pub fn main_page() -> Html {
    let i18n = use_i18n();

    html! {
        <div class="p-4">
            <h1 class="text-2xl font-bold">{i18n.t("app.title")}</h1>
        </div>
    }
}

#[function_component(WalletPage)]
pub fn wallet_page() -> Html {
    let i18n = use_i18n();

    html! {
        <div class="p-4">
            <h1 class="text-2xl font-bold">{i18n.t("tabs.wallet")}</h1>
        </div>
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let i18n = use_i18n();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_| {
        LocalFlagStore.logout();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="p-4 flex flex-col gap-4">
            <h1 class="text-2xl font-bold">{i18n.t("tabs.profile")}</h1>
            <Link<Route> to={Route::ProfileUpdate} classes="text-blue-600">
                {i18n.t("profile.update")}
            </Link<Route>>
            <button class="px-4 py-2 rounded-lg bg-gray-100" onclick={on_logout}>
                {i18n.t("profile.logout")}
            </button>
        </div>
    }
}
