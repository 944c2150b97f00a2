use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::i18n::translate;

#[function_component]
pub fn NotFoundPage() -> Html {
    let (state, _) = use_store::<State>();
    html! {
        <div class="text-center">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">
                {translate(state.lang, "not_found.title")}
            </h1>
            <p class="text-gray-600 dark:text-gray-300">
                {translate(state.lang, "not_found.body")}
            </p>
        </div>
    }
}
