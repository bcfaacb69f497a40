//! Resource load state machine
//!
//! One machine per page mount:
//!
//! ```text
//! Idle --mount--> Loading --ok--> Loaded(items)
//!                         --err-> Failed(message)
//! ```
//!
//! `Loaded` and `Failed` are terminal. The page owns the machine through a
//! [`SharedResource`]; the load task only keeps a `Weak`, so a result that
//! arrives after the page is gone is dropped on the floor.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::client::{ApiClient, Endpoint};
use crate::error::FetchError;

/// Lifecycle of a single fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Before the fetch starts; rendered like `Loading`
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Rejected state change
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("illegal load transition: {from} -> {to}")]
pub struct IllegalTransition {
    pub from: &'static str,
    pub to: &'static str,
}

impl<T> LoadState<T> {
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// `Idle -> Loading`
    pub fn start(&mut self) -> Result<(), IllegalTransition> {
        match self {
            LoadState::Idle => {
                *self = LoadState::Loading;
                Ok(())
            }
            other => Err(IllegalTransition {
                from: other.name(),
                to: "loading",
            }),
        }
    }

    /// `Loading -> Loaded | Failed`
    pub fn settle(&mut self, outcome: Result<T, FetchError>) -> Result<(), IllegalTransition> {
        if !matches!(self, LoadState::Loading) {
            return Err(IllegalTransition {
                from: self.name(),
                to: if outcome.is_ok() { "loaded" } else { "failed" },
            });
        }
        *self = match outcome {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err.message()),
        };
        Ok(())
    }
}

/// Turns the raw body into the page's payload
pub type Decoder<T> = fn(Value, &Endpoint) -> Result<T, FetchError>;

/// Collection decoder. A body that is not an array becomes an empty
/// collection; elements that are not objects are skipped. Item fields are
/// lenient (see `types`), so any object yields an item.
pub fn decode_collection<I: DeserializeOwned>(
    body: Value,
    endpoint: &Endpoint,
) -> Result<Vec<I>, FetchError> {
    let Value::Array(raw) = body else {
        log::warn!("{} did not return an array, showing it as empty", endpoint.path);
        return Ok(Vec::new());
    };

    let items = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(_) => match serde_json::from_value(item) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("{}: skipping item {index}: {e}", endpoint.path);
                    None
                }
            },
            other => {
                log::warn!("{}: skipping non-object item {index}: {other}", endpoint.path);
                None
            }
        })
        .collect();
    Ok(items)
}

/// Single-document decoder; a mismatched body fails with the endpoint's message
pub fn decode_document<D: DeserializeOwned>(
    body: Value,
    endpoint: &Endpoint,
) -> Result<D, FetchError> {
    serde_json::from_value(body).map_err(|e| {
        log::warn!("{}: unexpected document shape: {e}", endpoint.path);
        FetchError::Shape(endpoint.failure_message.to_string())
    })
}

type Observer<T> = Box<dyn FnMut(&LoadState<T>, &str)>;

/// Load state plus the page's filter query, with change notification
pub struct Resource<T> {
    state: LoadState<T>,
    query: String,
    mounted: bool,
    observers: Vec<Observer<T>>,
}

/// Page-owned handle
pub type SharedResource<T> = Rc<RefCell<Resource<T>>>;

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            query: String::new(),
            mounted: true,
            observers: Vec::new(),
        }
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedResource<T> {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Observers must not borrow the resource; they get everything as arguments
    pub fn subscribe(&mut self, observer: impl FnMut(&LoadState<T>, &str) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.notify();
        }
    }

    /// Returns false when the machine was already started
    pub fn begin(&mut self) -> bool {
        match self.state.start() {
            Ok(()) => {
                self.notify();
                true
            }
            Err(e) => {
                log::debug!("{e}");
                false
            }
        }
    }

    /// Apply a fetch result; ignored once unmounted or already settled
    pub fn settle(&mut self, outcome: Result<T, FetchError>) -> bool {
        if !self.is_mounted() {
            log::debug!("discarding result for unmounted page");
            return false;
        }
        match self.state.settle(outcome) {
            Ok(()) => {
                self.notify();
                true
            }
            Err(e) => {
                log::debug!("{e}");
                false
            }
        }
    }

    /// Detach from the page; late results are dropped from now on
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.observers.clear();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.state, &self.query);
        }
    }
}

/// What happened to a fetch result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Discarded,
}

/// Run one fetch cycle for a page: start, fetch, decode, settle
pub async fn load<T>(
    resource: Weak<RefCell<Resource<T>>>,
    client: ApiClient,
    endpoint: Endpoint,
    decode: Decoder<T>,
) -> Settled {
    let started = match resource.upgrade() {
        Some(page) => page.borrow_mut().begin(),
        None => false,
    };
    if !started {
        return Settled::Discarded;
    }

    let outcome = client
        .fetch_json(&endpoint)
        .await
        .and_then(|body| decode(body, &endpoint));

    if let Err(e) = &outcome {
        log::error!("{}: {e}", endpoint.path);
    }

    let Some(page) = resource.upgrade() else {
        log::debug!("{}: page gone before response", endpoint.path);
        return Settled::Discarded;
    };
    let applied = page.borrow_mut().settle(outcome);
    if applied {
        Settled::Applied
    } else {
        Settled::Discarded
    }
}
