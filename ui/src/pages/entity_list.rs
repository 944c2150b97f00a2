use yew::prelude::*;

use crate::components::{
    DataTable, ExportButton, FilterBar, PaginationControls,
};
use crate::entities::EntityList;
use crate::hooks::use_list_view;
use crate::i18n::translate;

/// The listing screen shared by every entity.
#[function_component]
pub fn EntityListPage<E: EntityList>() -> Html {
    let list = use_list_view::<E>();
    let lang = list.lang;
    let result = &list.result;

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-neutral-900 \
                           dark:text-neutral-100">
                    {translate(lang, E::TITLE_KEY)}
                </h2>
                <div class="flex items-center gap-4">
                    {if result.is_loading() && !result.is_initial_loading() {
                        html! {
                            <span class="text-sm text-neutral-500">
                                {translate(lang, "list.refreshing")}
                            </span>
                        }
                    } else {
                        html! {}
                    }}
                    <ExportButton
                        on_export={list.export.clone()}
                        is_exporting={list.is_exporting}
                        {lang}
                    />
                </div>
            </div>

            <FilterBar
                filters={E::filters()}
                draft={list.query.draft_filters().clone()}
                active_count={list.query.active_filter_count()}
                has_pending_changes={list.query.has_pending_changes()}
                on_change={list.set_draft_filter.clone()}
                on_apply={list.apply_filters.clone()}
                on_clear={list.clear_filters.clone()}
                is_loading={result.is_loading()}
                {lang}
            />

            <DataTable<E::Record>
                columns={list.columns.clone()}
                rows={result.rows.clone()}
                sort={list.query.sort().cloned()}
                on_sort={list.toggle_sort.clone()}
                is_loading={result.is_loading()}
                error={result.error_message.clone()}
                {lang}
            />

            <PaginationControls
                page={list.query.current_page()}
                page_size={list.query.page_size()}
                total={result.total_count}
                current_count={result.rows.len()}
                on_page_change={list.set_page.clone()}
                on_page_size_change={list.set_page_size.clone()}
                is_loading={result.is_loading()}
                {lang}
            />
        </div>
    }
}
