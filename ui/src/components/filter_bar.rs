use payloads::{DateRange, FilterValue, Filters};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::entities::{FilterKind, FilterSpec};
use crate::i18n::{Lang, translate, translate_with};
use crate::utils::time::{format_date, parse_date_input};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub filters: Vec<FilterSpec>,
    /// Values being edited; nothing is fetched until `on_apply`.
    pub draft: Filters,
    pub active_count: usize,
    #[prop_or(false)]
    pub has_pending_changes: bool,
    pub on_change: Callback<(String, FilterValue)>,
    pub on_apply: Callback<()>,
    pub on_clear: Callback<()>,
    #[prop_or(false)]
    pub is_loading: bool,
    pub lang: Lang,
}

/// Option value of a yes/no/any select.
fn flag_option(value: &FilterValue) -> &'static str {
    match value {
        FilterValue::Flag(true) => "true",
        FilterValue::Flag(false) => "false",
        _ => "",
    }
}

fn parse_flag_option(value: &str) -> FilterValue {
    match value {
        "true" => FilterValue::Flag(true),
        "false" => FilterValue::Flag(false),
        _ => FilterValue::Empty,
    }
}

fn date_range(value: Option<&FilterValue>) -> DateRange {
    match value {
        Some(FilterValue::DateRange(range)) => *range,
        _ => DateRange::default(),
    }
}

const INPUT_CLASS: &str = "border border-neutral-300 dark:border-neutral-600 \
                           rounded-md px-3 py-2 text-sm bg-white \
                           dark:bg-neutral-700";

#[function_component]
pub fn FilterBar(props: &Props) -> Html {
    if props.filters.is_empty() {
        return html! {};
    }
    let lang = props.lang;

    let field = |spec: &FilterSpec| {
        let name = spec.name.to_string();
        let current = props.draft.get(spec.name);
        let on_change = props.on_change.clone();

        let input = match spec.kind {
            FilterKind::Text => {
                let value = match current {
                    Some(FilterValue::Text(text)) => text.clone(),
                    _ => String::new(),
                };
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change
                        .emit((name.clone(), FilterValue::text(input.value())));
                });
                html! {
                    <input type="text" class={INPUT_CLASS} {value} {oninput} />
                }
            }
            FilterKind::Flag => {
                let selected = current.map(flag_option).unwrap_or_default();
                let onchange = Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    let value = parse_flag_option(&select.value());
                    on_change.emit((name.clone(), value));
                });
                let option = |value: &'static str, label_key: &str| {
                    html! {
                        <option {value} selected={value == selected}>
                            {translate(lang, label_key)}
                        </option>
                    }
                };
                html! {
                    <select class={INPUT_CLASS} {onchange}>
                        {option("", "filters.any")}
                        {option("true", "list.yes")}
                        {option("false", "list.no")}
                    </select>
                }
            }
            FilterKind::DateRange => {
                let range = date_range(current);
                let bound = |is_from: bool| {
                    let on_change = on_change.clone();
                    let name = name.clone();
                    let date = if is_from { range.from } else { range.to };
                    let value = date.map(format_date).unwrap_or_default();
                    let onchange = Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let date = parse_date_input(&input.value());
                        let mut range = range;
                        if is_from {
                            range.from = date;
                        } else {
                            range.to = date;
                        }
                        on_change.emit((name.clone(), range.into()));
                    });
                    let label_key =
                        if is_from { "filters.from" } else { "filters.to" };
                    html! {
                        <label class="flex items-center gap-1 text-xs">
                            {translate(lang, label_key)}
                            <input
                                type="date"
                                class={INPUT_CLASS}
                                {value}
                                {onchange}
                            />
                        </label>
                    }
                };
                html! {
                    <div class="flex gap-2">
                        {bound(true)}
                        {bound(false)}
                    </div>
                }
            }
        };

        html! {
            <div key={spec.name} class="flex flex-col gap-1">
                <span class="text-xs font-medium text-neutral-600 \
                             dark:text-neutral-400">
                    {translate(lang, spec.label_key)}
                </span>
                {input}
            </div>
        }
    };

    let on_apply = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_apply.emit(());
        })
    };
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <form
            onsubmit={on_apply}
            class="flex flex-wrap items-end gap-4 mb-4 p-4 rounded-lg \
                   bg-neutral-50 dark:bg-neutral-800"
        >
            {for props.filters.iter().map(field)}
            <div class="flex items-center gap-2">
                <button
                    type="submit"
                    disabled={props.is_loading}
                    class={classes!(
                        "px-4", "py-2", "rounded-md", "text-sm", "font-medium",
                        "text-white", "bg-blue-600", "hover:bg-blue-700",
                        props.has_pending_changes.then_some("ring-2"),
                    )}
                >
                    {translate(lang, "filters.apply")}
                </button>
                <button
                    type="button"
                    onclick={on_clear}
                    disabled={props.is_loading}
                    class="px-4 py-2 rounded-md text-sm font-medium \
                           text-neutral-700 dark:text-neutral-300 \
                           border border-neutral-300 dark:border-neutral-600"
                >
                    {translate(lang, "filters.clear")}
                </button>
                {if props.active_count > 0 {
                    html! {
                        <span class="px-2 py-1 rounded-full text-xs \
                                     bg-blue-100 text-blue-800 \
                                     dark:bg-blue-900 dark:text-blue-200">
                            {translate_with(
                                lang,
                                "filters.active",
                                &[("count", props.active_count.to_string())],
                            )}
                        </span>
                    }
                } else {
                    html! {}
                }}
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_select_maps_to_filter_values() {
        assert_eq!(parse_flag_option("false"), FilterValue::Flag(false));
        assert_eq!(parse_flag_option(""), FilterValue::Empty);
        assert_eq!(flag_option(&FilterValue::Flag(true)), "true");
        assert_eq!(flag_option(&FilterValue::Empty), "");
    }

    #[test]
    fn unset_range_has_open_bounds() {
        assert_eq!(date_range(None), DateRange::default());
        assert_eq!(
            date_range(Some(&FilterValue::text("x"))),
            DateRange::default()
        );
    }
}
