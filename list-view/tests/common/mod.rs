//! In-memory list endpoint for exercising the fetcher and controller.

use futures::channel::oneshot;
use list_view::ListEndpoint;
use payloads::{ClientError, ListRequest, Page, StatusCode};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: u32,
    pub name: String,
    pub extra: String,
}

pub fn rows(count: u32) -> Vec<Row> {
    (1..=count)
        .map(|id| Row {
            id,
            name: format!("Student {id}"),
            extra: format!("note {id}"),
        })
        .collect()
}

pub type Outcome = Result<Page<Row>, ClientError>;

/// Answers from `rows`, windowed by the request, unless a gate was
/// registered for the request's offset (or for the export, which has no
/// window); gated calls wait for the test to send their outcome.
#[derive(Clone, Default)]
pub struct FakeEndpoint {
    rows: Rc<Vec<Row>>,
    calls: Rc<RefCell<Vec<ListRequest>>>,
    gates: Rc<RefCell<HashMap<u64, oneshot::Receiver<Outcome>>>>,
    export_gate: Rc<RefCell<Option<oneshot::Receiver<Outcome>>>>,
}

impl FakeEndpoint {
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows: Rc::new(rows),
            ..Default::default()
        }
    }

    /// Hold the next call for `offset` until the returned sender fires.
    pub fn gate(&self, offset: u64) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(offset, rx);
        tx
    }

    /// Hold the next unwindowed call until the returned sender fires.
    pub fn gate_export(&self) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        *self.export_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<ListRequest> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> ListRequest {
        self.calls
            .borrow()
            .last()
            .cloned()
            .expect("no list call was made")
    }

    pub fn page_for(&self, request: &ListRequest) -> Page<Row> {
        let content = match request.window {
            Some(window) => self
                .rows
                .iter()
                .skip(window.offset as usize)
                .take(window.limit as usize)
                .cloned()
                .collect(),
            None => self.rows.to_vec(),
        };
        Page {
            content,
            total_elements: self.rows.len() as u64,
        }
    }
}

impl ListEndpoint for FakeEndpoint {
    type Record = Row;

    async fn list(&self, request: &ListRequest) -> Outcome {
        self.calls.borrow_mut().push(request.clone());
        let gate = match request.window {
            Some(window) => self.gates.borrow_mut().remove(&window.offset),
            None => self.export_gate.borrow_mut().take(),
        };
        match gate {
            Some(rx) => rx.await.expect("gate sender dropped"),
            None => Ok(self.page_for(request)),
        }
    }
}

pub fn server_error() -> ClientError {
    ClientError::APIError(StatusCode::INTERNAL_SERVER_ERROR, "boom".into())
}
