use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::i18n::{Lang, store_lang, translate};

#[function_component]
pub fn LangSelect() -> Html {
    let (state, dispatch) = use_store::<State>();

    let onchange = dispatch.reduce_mut_callback_with(|state, e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        if let Some(lang) = Lang::from_code(&select.value()) {
            store_lang(lang);
            state.lang = lang;
        }
    });

    html! {
        <label class="flex items-center gap-2 text-sm">
            <span class="sr-only">{translate(state.lang, "app.language")}</span>
            <select
                {onchange}
                class="border border-gray-300 dark:border-gray-600 rounded-md \
                       px-2 py-1 bg-white dark:bg-gray-700"
            >
                {for Lang::ALL.iter().map(|&lang| html! {
                    <option value={lang.code()} selected={lang == state.lang}>
                        {lang.native_name()}
                    </option>
                })}
            </select>
        </label>
    }
}
