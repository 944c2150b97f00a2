use list_view::ColumnDescriptor;
use payloads::{Sort, SortDirection};
use std::rc::Rc;
use yew::prelude::*;

use crate::i18n::{Lang, translate};

#[derive(Properties)]
pub struct Props<T: PartialEq + 'static> {
    pub columns: Rc<Vec<ColumnDescriptor<T>>>,
    pub rows: Vec<T>,
    pub sort: Option<Sort>,
    /// Emits the sort key of the clicked header
    pub on_sort: Callback<String>,
    #[prop_or(false)]
    pub is_loading: bool,
    /// Shown above the rows, which stay visible
    #[prop_or_default]
    pub error: Option<String>,
    pub lang: Lang,
}

impl<T: PartialEq> PartialEq for Props<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.columns, &other.columns)
            && self.rows == other.rows
            && self.sort == other.sort
            && self.on_sort == other.on_sort
            && self.is_loading == other.is_loading
            && self.error == other.error
            && self.lang == other.lang
    }
}

#[function_component]
pub fn DataTable<T: PartialEq + 'static>(props: &Props<T>) -> Html {
    let lang = props.lang;

    let header = |column: &ColumnDescriptor<T>| {
        let Some(sort_key) = column.sort_key.clone() else {
            return html! {
                <th class="px-4 py-3 text-left text-xs font-medium \
                           uppercase tracking-wider text-neutral-500 \
                           dark:text-neutral-400">
                    {&column.label}
                </th>
            };
        };

        let indicator = match &props.sort {
            Some(sort) if sort.key == sort_key => match sort.direction {
                SortDirection::Asc => " ▲",
                SortDirection::Desc => " ▼",
            },
            _ => "",
        };
        let onclick = {
            let on_sort = props.on_sort.clone();
            Callback::from(move |_: MouseEvent| on_sort.emit(sort_key.clone()))
        };

        html! {
            <th class="px-4 py-3 text-left text-xs font-medium uppercase \
                       tracking-wider text-neutral-500 dark:text-neutral-400">
                <button
                    {onclick}
                    disabled={props.is_loading}
                    class="uppercase hover:text-neutral-900 \
                           dark:hover:text-neutral-100"
                >
                    {&column.label}{indicator}
                </button>
            </th>
        }
    };

    let body = if props.rows.is_empty() {
        let message = if props.is_loading {
            translate(lang, "list.loading")
        } else {
            translate(lang, "list.empty")
        };
        html! {
            <tr>
                <td
                    colspan={props.columns.len().to_string()}
                    class="px-4 py-8 text-center text-neutral-600 \
                           dark:text-neutral-400"
                >
                    {message}
                </td>
            </tr>
        }
    } else {
        props
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                html! {
                    <tr key={i} class="border-t border-neutral-200 \
                                       dark:border-neutral-700">
                        {for props.columns.iter().map(|column| html! {
                            <td class="px-4 py-2 text-sm text-neutral-900 \
                                       dark:text-neutral-100">
                                {column.render(row)}
                            </td>
                        })}
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div>
            {if let Some(error) = &props.error {
                html! {
                    <div class="mb-4 p-4 rounded-md bg-red-50 \
                                dark:bg-red-900/20 border border-red-200 \
                                dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {error}
                        </p>
                    </div>
                }
            } else {
                html! {}
            }}
            <div class="overflow-x-auto">
                <table class={classes!(
                    "min-w-full",
                    props.is_loading.then_some("opacity-60"),
                )}>
                    <thead class="bg-neutral-50 dark:bg-neutral-800">
                        <tr>
                            {for props.columns.iter().map(header)}
                        </tr>
                    </thead>
                    <tbody>
                        {body}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
