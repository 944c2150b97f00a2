use base64::{Engine, engine::general_purpose::STANDARD};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;
use yew::prelude::*;

use crate::i18n::{Lang, translate};

/// Byte order mark so spreadsheet programs read the file as UTF-8.
const BOM: &str = "\u{feff}";

pub fn csv_data_url(csv: &str) -> String {
    let encoded = STANDARD.encode(format!("{BOM}{csv}"));
    format!("data:text/csv;charset=utf-8;base64,{encoded}")
}

/// Hand `csv` to the browser as a file download.
pub fn download_csv(file_name: &str, csv: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&csv_data_url(csv));
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_export: Callback<()>,
    #[prop_or(false)]
    pub is_exporting: bool,
    pub lang: Lang,
}

#[function_component]
pub fn ExportButton(props: &Props) -> Html {
    let onclick = {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| on_export.emit(()))
    };
    let label = if props.is_exporting {
        translate(props.lang, "export.busy")
    } else {
        translate(props.lang, "export.button")
    };

    html! {
        <button
            {onclick}
            disabled={props.is_exporting}
            class="px-4 py-2 rounded-md text-sm font-medium \
                   text-neutral-700 dark:text-neutral-300 bg-white \
                   dark:bg-neutral-700 border border-neutral-300 \
                   dark:border-neutral-600 hover:bg-neutral-50 \
                   dark:hover:bg-neutral-600 disabled:opacity-50"
        >
            {label}
        </button>
    }
}
