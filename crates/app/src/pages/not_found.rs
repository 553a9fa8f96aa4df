use crate::i18n::use_i18n;
use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let i18n = use_i18n();

    html! {
        <div class="min-h-screen flex items-center justify-center">
            <h1 class="text-xl text-gray-600">{i18n.t("not_found")}</h1>
        </div>
    }
}
