//! Routes and the guarded route switch

use crate::pages::{
    AddStudentPage, GroupDetailsPage, LanguageSelectPage, LoginPage, MainPage, NotFoundPage,
    ProfilePage, ProfileUpdatePage, TabsPage, WalletPage,
};
use crate::session::LoginHandler;
use crate::storage::LocalFlagStore;
use once_cell::sync::Lazy;
use teachers_core::{Decision, NavigationGuard, RouteTable};
use tracing::{debug, error};
use yew::prelude::*;
use yew_router::prelude::*;

static ROUTES: Lazy<RouteTable> = Lazy::new(|| {
    let routes = RouteTable::teachers_app();
    if let Err(err) = routes.validate() {
        error!("Route table is inconsistent with the navigation guard: {err}");
    }
    routes
});

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/language-select")]
    LanguageSelect,
    #[at("/login")]
    Login,
    #[at("/group/:id")]
    GroupDetails { id: String },
    #[at("/group/:id/add-student")]
    AddStudent { id: String },
    #[at("/profile-update")]
    ProfileUpdate,
    #[at("/tabs")]
    Tabs,
    #[at("/tabs/main")]
    Main,
    #[at("/tabs/wallet")]
    Wallet,
    #[at("/tabs/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Where the router should go instead of rendering `route`, if anywhere
pub fn redirect_for(route: &Route, decision: Decision, resolved: &str) -> Option<Route> {
    let target = match decision {
        Decision::RedirectTo(page) => page.path()?,
        Decision::Allow if resolved != route.to_path() => resolved,
        Decision::Allow => return None,
    };
    Some(Route::recognize(target).unwrap_or(Route::NotFound))
}

#[derive(Properties, PartialEq)]
pub struct GuardRedirectProps {
    pub to: Route,
}

/// Replaces the current history entry with `to`, so the blocked location
/// is not left behind for the back button
#[function_component(GuardRedirect)]
pub fn guard_redirect(props: &GuardRedirectProps) -> Html {
    let navigator = use_navigator();
    use_effect_with(props.to.clone(), move |target| {
        if let Some(navigator) = navigator {
            navigator.replace(target);
        }
    });
    Html::default()
}

fn switch(route: Route, on_login: Option<LoginHandler>) -> Html {
    let path = route.to_path();
    let navigation = NavigationGuard::new(&ROUTES, LocalFlagStore).check(&path);

    if let Some(target) = redirect_for(&route, navigation.decision, &navigation.resolved_path) {
        debug!(from = %path, to = %target.to_path(), "Redirecting");
        return html! { <GuardRedirect to={target} /> };
    }

    match route {
        Route::LanguageSelect => html! { <LanguageSelectPage /> },
        Route::Login => html! { <LoginPage on_submit={on_login} /> },
        Route::GroupDetails { id } => html! { <GroupDetailsPage {id} /> },
        Route::AddStudent { id } => html! { <AddStudentPage {id} /> },
        Route::ProfileUpdate => html! { <ProfileUpdatePage /> },
        Route::Main => html! { <TabsPage><MainPage /></TabsPage> },
        Route::Wallet => html! { <TabsPage><WalletPage /></TabsPage> },
        Route::Profile => html! { <TabsPage><ProfilePage /></TabsPage> },
        // Redirect records; only reached if the table stops redirecting them
        Route::Root | Route::Tabs | Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppRouterProps {
    #[prop_or_default]
    pub on_login: Option<LoginHandler>,
}

#[function_component(AppRouter)]
pub fn app_router(props: &AppRouterProps) -> Html {
    let on_login = props.on_login.clone();
    let render = Callback::from(move |route| switch(route, on_login.clone()));
    html! {
        <HashRouter>
            <Switch<Route> {render} />
        </HashRouter>
    }
}
