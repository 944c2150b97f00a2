use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::i18n::translate;

/// The global error channel, used by actions that have no table to show
/// their failure in.
#[function_component]
pub fn ErrorBanner() -> Html {
    let (state, dispatch) = use_store::<State>();
    let Some(message) = state.error_message.clone() else {
        return html! {};
    };

    let on_dismiss = dispatch.reduce_mut_callback(|state| state.clear_error());

    html! {
        <div class="mb-4 p-4 rounded-md bg-red-50 dark:bg-red-900/20 border \
                    border-red-200 dark:border-red-800 flex items-start \
                    justify-between gap-4">
            <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
            <button
                onclick={on_dismiss}
                class="text-sm text-red-700 dark:text-red-400 underline"
            >
                {translate(state.lang, "app.dismiss")}
            </button>
        </div>
    }
}
