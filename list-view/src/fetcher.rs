//! Turns query state into list calls and keeps the latest page.
//!
//! Several fetches may be in flight at once. Each call to
//! [`DataFetcher::fetch_page`] takes a new generation number when it is
//! issued; a response is applied only if its generation is still the latest
//! one, so an older request that happens to finish last is dropped.

use payloads::{APIClient, ClientError, ListPath, ListRequest, Page};
use serde::de::DeserializeOwned;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::{FetchError, ListConfig, QueryState};

/// Entity-scoped parameters sent with every call, such as `school_id`.
pub type EntityParams = BTreeMap<String, String>;

/// A backend list endpoint for one kind of record.
pub trait ListEndpoint {
    type Record: Clone;

    fn list(
        &self,
        request: &ListRequest,
    ) -> impl Future<Output = Result<Page<Self::Record>, ClientError>>;
}

/// [`ListEndpoint`] backed by the HTTP client.
pub struct ApiEndpoint<T> {
    client: Rc<APIClient>,
    path: ListPath,
    _record: PhantomData<fn() -> T>,
}

impl<T> ApiEndpoint<T> {
    pub fn new(client: Rc<APIClient>, path: ListPath) -> Self {
        Self {
            client,
            path,
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> ListPath {
        self.path
    }
}

impl<T> Clone for ApiEndpoint<T> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone(), self.path)
    }
}

impl<T: DeserializeOwned + Clone> ListEndpoint for ApiEndpoint<T> {
    type Record = T;

    async fn list(
        &self,
        request: &ListRequest,
    ) -> Result<Page<T>, ClientError> {
        self.client.list_page(self.path, request).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// What the table shows: the last successful page plus the state of the
/// most recent request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult<T> {
    pub rows: Vec<T>,
    pub total_count: u64,
    pub status: FetchStatus,
    /// Set only while `status` is [`FetchStatus::Error`].
    pub error_message: Option<String>,
}

impl<T> Default for FetchResult<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
            status: FetchStatus::Idle,
            error_message: None,
        }
    }
}

impl<T> FetchResult<T> {
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Loading with nothing fetched yet.
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading() && self.rows.is_empty() && self.total_count == 0
    }
}

/// Whether a settled response made it onto the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied(FetchStatus),
    Stale,
}

struct Shared<T> {
    generation: Cell<u64>,
    result: RefCell<FetchResult<T>>,
}

pub struct DataFetcher<E: ListEndpoint> {
    endpoint: E,
    lang: Option<String>,
    failure_notice: Rc<str>,
    shared: Rc<Shared<E::Record>>,
}

impl<E: ListEndpoint + Clone> Clone for DataFetcher<E> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            lang: self.lang.clone(),
            failure_notice: self.failure_notice.clone(),
            shared: self.shared.clone(),
        }
    }
}

impl<E> DataFetcher<E>
where
    E: ListEndpoint + Clone + 'static,
    E::Record: 'static,
{
    pub fn new(endpoint: E, config: &ListConfig) -> Self {
        Self {
            endpoint,
            lang: config.lang.clone(),
            failure_notice: Rc::from(config.failure_notice.as_str()),
            shared: Rc::new(Shared {
                generation: Cell::new(0),
                result: RefCell::new(FetchResult::default()),
            }),
        }
    }

    pub fn set_lang(&mut self, lang: Option<String>) {
        self.lang = lang;
    }

    /// Applies to fetches issued from now on.
    pub fn set_failure_notice(&mut self, notice: &str) {
        self.failure_notice = Rc::from(notice);
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// The request [`fetch_page`](Self::fetch_page) sends for this state.
    pub fn page_request(
        &self,
        params: &EntityParams,
        query: &QueryState,
    ) -> ListRequest {
        ListRequest {
            params: params.clone(),
            filters: query.applied_filters().clone(),
            window: Some(query.window()),
            sort: query.sort().cloned(),
            export_all: false,
            lang: self.lang.clone(),
        }
    }

    /// The request [`fetch_all`](Self::fetch_all) sends for this state.
    pub fn export_request(
        &self,
        params: &EntityParams,
        query: &QueryState,
    ) -> ListRequest {
        ListRequest {
            window: None,
            export_all: true,
            ..self.page_request(params, query)
        }
    }

    pub fn snapshot(&self) -> FetchResult<E::Record> {
        self.shared.result.borrow().clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.shared.result.borrow().status
    }

    /// Issue a page request.
    ///
    /// The status flips to loading immediately; the returned future performs
    /// the call and applies the outcome unless a newer fetch was issued in
    /// the meantime.
    pub fn fetch_page(
        &self,
        params: &EntityParams,
        query: &QueryState,
    ) -> impl Future<Output = Settled> + use<E> {
        let request = self.page_request(params, query);
        let generation = self.shared.generation.get() + 1;
        self.shared.generation.set(generation);
        {
            let mut result = self.shared.result.borrow_mut();
            result.status = FetchStatus::Loading;
            result.error_message = None;
        }
        tracing::debug!(generation, window = ?request.window, "fetching page");

        let endpoint = self.endpoint.clone();
        let shared = self.shared.clone();
        let failure_notice = self.failure_notice.clone();

        async move {
            let outcome = endpoint.list(&request).await;

            if shared.generation.get() != generation {
                tracing::debug!(generation, "discarding stale list response");
                return Settled::Stale;
            }

            let mut result = shared.result.borrow_mut();
            match outcome {
                Ok(page) => {
                    result.rows = page.content;
                    result.total_count = page.total_elements;
                    result.status = FetchStatus::Success;
                    result.error_message = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to fetch list page");
                    // Keep the previous rows on screen.
                    result.status = FetchStatus::Error;
                    result.error_message = Some(failure_notice.to_string());
                }
            }
            Settled::Applied(result.status)
        }
    }

    /// Fetch every record matching the applied filters, ignoring paging.
    ///
    /// Nothing shown in the table changes, whatever the outcome.
    pub fn fetch_all(
        &self,
        params: &EntityParams,
        query: &QueryState,
    ) -> impl Future<Output = Result<Vec<E::Record>, FetchError>> + use<E> {
        let request = self.export_request(params, query);
        let endpoint = self.endpoint.clone();

        async move {
            tracing::debug!(sort = ?request.sort, "fetching all records");
            match endpoint.list(&request).await {
                Ok(page) => Ok(page.content),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to fetch all records");
                    Err(FetchError(e))
                }
            }
        }
    }
}
