use list_view::ListConfig;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{Lang, translate, translate_with};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current page (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Matching items across all pages, as reported by the server
    pub total: u64,
    /// Number of items on the current page
    pub current_count: usize,
    pub on_page_change: Callback<u32>,
    pub on_page_size_change: Callback<u32>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
    pub lang: Lang,
}

/// Last page for `total` items; an empty listing still has page 1.
pub fn page_count(total: u64, page_size: u32) -> u64 {
    total.div_ceil(u64::from(page_size.max(1))).max(1)
}

/// 1-based bounds of the rows shown, or `None` when the page is empty.
pub fn visible_range(
    page: u32,
    page_size: u32,
    current_count: usize,
) -> Option<(u64, u64)> {
    if current_count == 0 {
        return None;
    }
    let offset = u64::from(page.max(1) - 1) * u64::from(page_size);
    Some((offset + 1, offset + current_count as u64))
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        page,
        page_size,
        total,
        current_count,
        is_loading,
        lang,
        ..
    } = *props;

    let pages = page_count(total, page_size);
    let prev_disabled = page <= 1 || is_loading;
    let next_disabled = u64::from(page) >= pages || is_loading;

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(page.saturating_sub(1).max(1));
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(page + 1);
        })
    };

    let on_size = {
        let on_page_size_change = props.on_page_size_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u32>() {
                on_page_size_change.emit(size);
            }
        })
    };

    let summary = match visible_range(page, page_size, current_count) {
        Some((start, end)) => translate_with(
            lang,
            "list.showing",
            &[
                ("start", start.to_string()),
                ("end", end.to_string()),
                ("total", total.to_string()),
            ],
        ),
        None => translate(lang, "list.empty"),
    };
    let page_label = translate_with(
        lang,
        "list.page",
        &[("page", page.to_string()), ("pages", pages.to_string())],
    );

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex flex-wrap items-center justify-between gap-4 mt-4 \
                    pt-4 border-t border-neutral-200 dark:border-neutral-700">
            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {summary}
            </span>

            <label class="flex items-center gap-2 text-sm text-neutral-600 \
                          dark:text-neutral-400">
                {translate(lang, "list.rows_per_page")}
                <select
                    onchange={on_size}
                    disabled={is_loading}
                    class="border border-neutral-300 dark:border-neutral-600 \
                           rounded-md px-2 py-1 bg-white dark:bg-neutral-700"
                >
                    {for ListConfig::PAGE_SIZE_OPTIONS.iter().map(|&size| html! {
                        <option
                            value={size.to_string()}
                            selected={size == page_size}
                        >
                            {size}
                        </option>
                    })}
                </select>
            </label>

            <div class="flex items-center gap-2">
                <button
                    onclick={on_previous}
                    disabled={prev_disabled}
                    class={button_class(prev_disabled)}
                >
                    {translate(lang, "list.previous")}
                </button>
                <span class="text-sm text-neutral-600 dark:text-neutral-400">
                    {page_label}
                </span>
                <button
                    onclick={on_next}
                    disabled={next_disabled}
                    class={button_class(next_disabled)}
                >
                    {translate(lang, "list.next")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(35, 10), 4);
        assert_eq!(page_count(40, 10), 4);
        assert_eq!(page_count(0, 10), 1);
    }

    #[test]
    fn visible_range_follows_the_page() {
        assert_eq!(visible_range(3, 10, 10), Some((21, 30)));
        assert_eq!(visible_range(4, 10, 5), Some((31, 35)));
        assert_eq!(visible_range(2, 25, 0), None);
    }
}
