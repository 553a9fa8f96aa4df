//! Group and profile detail pages

use crate::i18n::use_i18n;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GroupProps {
    pub id: AttrValue,
}

#[function_component(GroupDetailsPage)]
pub fn group_details_page(props: &GroupProps) -> Html {
    let i18n = use_i18n();

    html! {
        <div class="p-4">
            <h1 class="text-2xl font-bold mb-4">
                {i18n.t_with("group.title", &[("id", props.id.as_str())])}
            </h1>
            <Link<Route> to={Route::AddStudent { id: props.id.to_string() }} classes="text-blue-600">
                {i18n.t("group.add_student")}
            </Link<Route>>
        </div>
    }
}

#[function_component(AddStudentPage)]
pub fn add_student_page(props: &GroupProps) -> Html {
    let i18n = use_i18n();

    html! {
        <div class="p-4">
            <h1 class="text-2xl font-bold">{i18n.t("group.add_student")}</h1>
            <p class="text-gray-500">{i18n.t_with("group.title", &[("id", props.id.as_str())])}</p>
        </div>
    }
}

#[function_component(ProfileUpdatePage)]
pub fn profile_update_page() -> Html {
    let i18n = use_i18n();

    html! {
        <div class="p-4">
            <h1 class="text-2xl font-bold">{i18n.t("profile.update")}</h1>
        </div>
    }
}
