use list_view::{
    ApiEndpoint, ColumnDescriptor, FetchResult, ListConfig, ListController,
    QueryState, Settled, build_columns, build_export_descriptor,
};
use payloads::{FilterValue, SortDirection};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::export_button::download_csv;
use crate::entities::EntityList;
use crate::i18n::{Lang, translate};
use crate::{State, get_api_client};

type Controller<E> = ListController<ApiEndpoint<<E as EntityList>::Record>>;

/// Hook return type for a list view
pub struct ListViewHandle<E: EntityList> {
    pub result: FetchResult<E::Record>,
    pub query: QueryState,
    pub columns: Rc<Vec<ColumnDescriptor<E::Record>>>,
    pub lang: Lang,
    pub is_exporting: bool,
    /// 1-based page
    pub set_page: Callback<u32>,
    /// Changes the page size and goes back to the first page.
    pub set_page_size: Callback<u32>,
    /// Sorts ascending by the key, or flips the direction if the list is
    /// already sorted by it.
    pub toggle_sort: Callback<String>,
    pub set_draft_filter: Callback<(String, FilterValue)>,
    pub apply_filters: Callback<()>,
    pub clear_filters: Callback<()>,
    pub export: Callback<()>,
}

fn new_controller<E: EntityList>(lang: Lang) -> Controller<E> {
    let client = Rc::new(get_api_client(lang));
    let config = ListConfig {
        failure_notice: translate(lang, "list.fetch_failed"),
        ..ListConfig::default()
    }
    .with_lang(lang.code());

    ListController::new(ApiEndpoint::new(client, E::PATH), &config)
        .with_default_filters(E::default_filters())
}

/// Re-render now to show the loading state, and again once the fetch
/// settles unless a newer one superseded it.
fn drive(
    fetch: impl Future<Output = Settled> + 'static,
    update: UseForceUpdateHandle,
) {
    update.force_update();
    yew::platform::spawn_local(async move {
        if let Settled::Applied(_) = fetch.await {
            update.force_update();
        }
    });
}

fn fetch_callback<E, A, F, Fut>(
    controller: &Rc<RefCell<Controller<E>>>,
    update: &UseForceUpdateHandle,
    action: F,
) -> Callback<A>
where
    E: EntityList,
    A: 'static,
    F: Fn(&mut Controller<E>, A) -> Fut + 'static,
    Fut: Future<Output = Settled> + 'static,
{
    let controller = controller.clone();
    let update = update.clone();
    Callback::from(move |arg: A| {
        let fetch = action(&mut *controller.borrow_mut(), arg);
        drive(fetch, update.clone());
    })
}

/// Paginated, sortable, filterable listing of one entity.
///
/// Fetches on mount and again whenever the display language changes; the
/// column labels are rebuilt at the same time.
#[hook]
pub fn use_list_view<E: EntityList>() -> ListViewHandle<E> {
    let (state, dispatch) = use_store::<State>();
    let lang = state.lang;
    let controller = use_mut_ref(|| new_controller::<E>(lang));
    let update = use_force_update();
    let is_exporting = use_state(|| false);

    let columns = use_memo(lang, |lang| {
        build_columns(&E::fields(*lang), |key| translate(*lang, key))
    });

    {
        let controller = controller.clone();
        let update = update.clone();
        use_effect_with(lang, move |lang| {
            let fetch = controller.borrow_mut().set_lang(
                Some(lang.code().to_string()),
                &translate(*lang, "list.fetch_failed"),
            );
            drive(fetch, update);
        });
    }

    let set_page =
        fetch_callback::<E, _, _, _>(&controller, &update, |list, page| list.set_page(page));
    let set_page_size = fetch_callback::<E, _, _, _>(&controller, &update, |list, size| {
        list.set_page_size(size, 1)
    });
    let toggle_sort =
        fetch_callback::<E, _, _, _>(&controller, &update, |list, key: String| {
            let direction = match list.query().sort() {
                Some(sort) if sort.key == key => sort.direction.reversed(),
                _ => SortDirection::Asc,
            };
            list.set_sort(key, direction)
        });
    let apply_filters =
        fetch_callback::<E, _, _, _>(&controller, &update, |list, ()| list.apply_filters());
    let clear_filters =
        fetch_callback::<E, _, _, _>(&controller, &update, |list, ()| list.clear_filters());

    let set_draft_filter = {
        let controller = controller.clone();
        let update = update.clone();
        Callback::from(move |(name, value): (String, FilterValue)| {
            controller.borrow_mut().set_draft_filter(name, value);
            update.force_update();
        })
    };

    let export = {
        let controller = controller.clone();
        let is_exporting = is_exporting.clone();
        Callback::from(move |_| {
            if *is_exporting {
                return;
            }
            let descriptor =
                build_export_descriptor(E::export_keys(), |key| {
                    E::export_label(lang, key)
                });
            let table = controller.borrow().export_table(&descriptor);
            let is_exporting = is_exporting.clone();
            let dispatch = dispatch.clone();

            is_exporting.set(true);
            yew::platform::spawn_local(async move {
                let written = match table.await {
                    Ok(table) => {
                        table.to_csv_string().map_err(|e| e.to_string())
                    }
                    Err(e) => Err(e.to_string()),
                };
                let downloaded = written.and_then(|csv| {
                    download_csv(E::EXPORT_FILE, &csv)
                        .map_err(|e| format!("{e:?}"))
                });
                if let Err(e) = downloaded {
                    tracing::warn!(
                        error = %e,
                        file = E::EXPORT_FILE,
                        "export failed"
                    );
                    dispatch.reduce_mut(|state| {
                        state.set_error(translate(lang, "export.failed"))
                    });
                }
                is_exporting.set(false);
            });
        })
    };

    let controller = controller.borrow();
    ListViewHandle {
        result: controller.result(),
        query: controller.query().clone(),
        columns,
        lang,
        is_exporting: *is_exporting,
        set_page,
        set_page_size,
        toggle_sort,
        set_draft_filter,
        apply_filters,
        clear_filters,
        export,
    }
}
