//! Client-side CRUD state for one resource kind.
//!
//! A [`ResourceStore`] holds the authoritative list snapshot for one kind of
//! record (reservations, users) and keeps it in sync with the REST backend.
//! Every successful mutation is followed by a wholesale refetch of the
//! collection: the list only ever reflects server state, never an optimistic
//! local edit.
//!
//! # Ordering
//! Each `refresh` is stamped with an issue generation. A response is applied
//! only when its generation is newer than the one currently shown, so when
//! refreshes overlap the most recently issued one wins regardless of the order
//! in which responses arrive.
//!
//! # Teardown
//! Views call [`ResourceStore::detach`] when they are destroyed. Responses
//! arriving afterwards are dropped and the change subscriber is released.
//!
//! The store is built for the single-threaded browser event loop: state lives
//! in `Rc<RefCell<..>>` and no borrow is held across an `.await`.

pub mod memory;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiResult, StoreError, StoreResult};

/// A record kind served by the backend under its own collection path.
pub trait Resource: DeserializeOwned + Clone + 'static {
    type Id: fmt::Display + Clone + PartialEq;

    /// Collection path relative to the API base, with trailing slash.
    const PATH: &'static str;
    /// Lower-case singular noun used in prompts and log lines.
    const LABEL: &'static str;

    fn id(&self) -> &Self::Id;

    fn item_path(id: &Self::Id) -> String {
        format!("{}{}/", Self::PATH, id)
    }

    /// Record-level invariants. Records failing it are still listed, but
    /// logged after each refresh.
    fn is_well_formed(&self) -> bool {
        true
    }
}

/// JSON-over-HTTP transport. Paths are relative to the configured API base.
#[async_trait(?Send)]
pub trait RestClient {
    async fn get(&self, path: &str) -> ApiResult<Value>;
    async fn post(&self, path: &str, body: Value) -> ApiResult<Value>;
    async fn patch(&self, path: &str, body: Value) -> ApiResult<Value>;
    async fn delete(&self, path: &str) -> ApiResult<()>;
}

/// Yes/no gate asked before destructive actions. There is no timeout.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

type Filter<T> = Rc<dyn Fn(&T) -> bool>;
type Subscriber = Rc<dyn Fn()>;

struct State<T> {
    items: Vec<T>,
    filter: Option<Filter<T>>,
    /// Generation handed to the most recently issued refresh.
    issued: u64,
    /// Generation of the response currently in `items`.
    applied: u64,
    in_flight: usize,
    detached: bool,
    subscriber: Option<Subscriber>,
}

/// Authoritative list for one resource kind. Cloning shares the same state.
pub struct ResourceStore<T: Resource> {
    client: Rc<dyn RestClient>,
    state: Rc<RefCell<State<T>>>,
}

impl<T: Resource> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(client: Rc<dyn RestClient>) -> Self {
        Self {
            client,
            state: Rc::new(RefCell::new(State {
                items: Vec::new(),
                filter: None,
                issued: 0,
                applied: 0,
                in_flight: 0,
                detached: false,
                subscriber: None,
            })),
        }
    }

    /// Items passing the current filter, in server order.
    pub fn items(&self) -> Vec<T> {
        let state = self.state.borrow();
        match &state.filter {
            Some(filter) => state.items.iter().filter(|item| filter(*item)).cloned().collect(),
            None => state.items.clone(),
        }
    }

    /// The unfiltered snapshot.
    pub fn all_items(&self) -> Vec<T> {
        self.state.borrow().items.clone()
    }

    pub fn find(&self, id: &T::Id) -> Option<T> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().in_flight > 0
    }

    /// Restricts what [`items`](Self::items) returns. The snapshot is untouched.
    pub fn set_filter(&self, filter: impl Fn(&T) -> bool + 'static) {
        self.state.borrow_mut().filter = Some(Rc::new(filter));
        self.notify();
    }

    pub fn clear_filter(&self) {
        self.state.borrow_mut().filter = None;
        self.notify();
    }

    /// Registers the callback run after every state change. Replaces any
    /// previous subscriber.
    pub fn subscribe(&self, on_change: impl Fn() + 'static) {
        self.state.borrow_mut().subscriber = Some(Rc::new(on_change));
    }

    /// Stops applying responses and drops the subscriber.
    pub fn detach(&self) {
        let mut state = self.state.borrow_mut();
        state.detached = true;
        state.subscriber = None;
    }

    /// Re-reads the whole collection and replaces the snapshot.
    ///
    /// Failures are logged and leave the current items in place. Single
    /// attempt, no retry.
    pub async fn refresh(&self) {
        let generation = {
            let mut state = self.state.borrow_mut();
            if state.detached {
                return;
            }
            state.issued += 1;
            state.in_flight += 1;
            state.issued
        };
        self.notify();

        let result = self.fetch_all().await;

        {
            let mut state = self.state.borrow_mut();
            state.in_flight -= 1;
            if state.detached {
                debug!("dropping {} list response after detach", T::LABEL);
                return;
            }
            match result {
                Ok(items) if generation > state.applied => {
                    debug!(
                        "applying {} {} records (generation {})",
                        items.len(),
                        T::LABEL,
                        generation
                    );
                    for item in items.iter().filter(|item| !item.is_well_formed()) {
                        warn!("{} {} is malformed", T::LABEL, item.id());
                    }
                    state.items = items;
                    state.applied = generation;
                }
                Ok(_) => {
                    debug!(
                        "discarding stale {} list (generation {} <= {})",
                        T::LABEL,
                        generation,
                        state.applied
                    );
                }
                Err(err) => error!("Error fetching {} list: {}", T::LABEL, err),
            }
        }
        self.notify();
    }

    /// Creates a record, then refreshes before returning.
    pub async fn create<P: Serialize + ?Sized>(&self, payload: &P) -> StoreResult<()> {
        let body = serde_json::to_value(payload)?;
        if let Err(err) = self.client.post(T::PATH, body).await {
            error!("Error creating {}: {}", T::LABEL, err);
            return Err(err.into());
        }
        info!("created {}", T::LABEL);
        self.refresh().await;
        Ok(())
    }

    /// Partially updates a record (only the fields in `partial` change on the
    /// server), then refreshes before returning.
    pub async fn update_field<P: Serialize + ?Sized>(
        &self,
        id: &T::Id,
        partial: &P,
    ) -> StoreResult<()> {
        let body = serde_json::to_value(partial)?;
        if let Err(err) = self.client.patch(&T::item_path(id), body).await {
            error!("Error updating {} {}: {}", T::LABEL, id, err);
            return Err(err.into());
        }
        info!("updated {} {}", T::LABEL, id);
        self.refresh().await;
        Ok(())
    }

    /// Deletes a record once `confirm` agrees, then refreshes.
    ///
    /// Nothing is removed locally; the record disappears with the refetch.
    pub async fn try_delete(&self, id: &T::Id, confirm: &dyn Confirm) -> StoreResult<()> {
        let prompt = format!("Are you sure you want to delete this {}?", T::LABEL);
        if !confirm.confirm(&prompt) {
            return Err(StoreError::NotConfirmed);
        }
        if let Err(err) = self.client.delete(&T::item_path(id)).await {
            error!("Error deleting {} {}: {}", T::LABEL, id, err);
            return Err(err.into());
        }
        info!("deleted {} {}", T::LABEL, id);
        self.refresh().await;
        Ok(())
    }

    /// [`try_delete`](Self::try_delete) flattened to a success flag.
    pub async fn delete(&self, id: &T::Id, confirm: &dyn Confirm) -> bool {
        match self.try_delete(id, confirm).await {
            Ok(()) => true,
            Err(StoreError::NotConfirmed) => {
                debug!("delete of {} {} declined", T::LABEL, id);
                false
            }
            Err(_) => false,
        }
    }

    async fn fetch_all(&self) -> StoreResult<Vec<T>> {
        let body = self.client.get(T::PATH).await?;
        Ok(serde_json::from_value(body)?)
    }

    fn notify(&self) {
        let subscriber = self.state.borrow().subscriber.clone();
        if let Some(subscriber) = subscriber {
            subscriber();
        }
    }
}
