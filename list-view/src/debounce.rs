//! Cancel-and-reschedule scheduling, one pending task per key.
//!
//! Used for row validation while a bulk upload is being edited: every
//! keystroke reschedules the row's validation, which only runs once the row
//! has been quiet for the delay. The delay itself lives in the task (the
//! caller awaits its platform's sleep first), so this works the same with
//! browser timers and with tokio.

use futures::future::{AbortHandle, Abortable};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

struct Pending {
    id: u64,
    handle: AbortHandle,
}

pub struct Debouncer<K> {
    pending: Rc<RefCell<HashMap<K, Pending>>>,
    next_id: Rc<Cell<u64>>,
}

impl<K> Clone for Debouncer<K> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<K> Default for Debouncer<K> {
    fn default() -> Self {
        Self {
            pending: Rc::new(RefCell::new(HashMap::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }
}

impl<K: Eq + Hash + Clone + 'static> Debouncer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is pending for `key` with `task`.
    ///
    /// The returned future resolves to `None` if the task is superseded or
    /// cancelled before it completes.
    pub fn schedule<F>(
        &self,
        key: K,
        task: F,
    ) -> impl Future<Output = Option<F::Output>> + use<K, F>
    where
        F: Future + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let (handle, registration) = AbortHandle::new_pair();
        let previous = self
            .pending
            .borrow_mut()
            .insert(key.clone(), Pending { id, handle });
        if let Some(previous) = previous {
            previous.handle.abort();
        }

        let pending = self.pending.clone();
        let task = Abortable::new(task, registration);

        async move {
            let output = task.await.ok();
            let mut pending = pending.borrow_mut();
            if pending.get(&key).is_some_and(|entry| entry.id == id) {
                pending.remove(&key);
            }
            output
        }
    }

    /// Returns whether something was pending for `key`.
    pub fn cancel(&self, key: &K) -> bool {
        match self.pending.borrow_mut().remove(key) {
            Some(entry) => {
                entry.handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&self) {
        for (_, entry) in self.pending.borrow_mut().drain() {
            entry.handle.abort();
        }
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.borrow().contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }
}
