//! Records served by the backend.
//!
//! Every record type implements [`Resource`], which ties it to its REST
//! collection and to the draft payload used for create/update.

mod employee;
mod enterprise;
mod status;
mod subsidiary;
mod transport_request;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use employee::{Employee, EmployeeDraft, EmployeeRole};
pub use enterprise::{Enterprise, EnterpriseDraft};
pub use status::{Status, TransportStatus};
pub use subsidiary::{Subsidiary, SubsidiaryDraft};
pub use transport_request::{TransportRequest, TransportRequestDraft};

/// A record exposed by a REST collection.
pub trait Resource: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Display + Debug + Send + Sync + 'static;

    /// Create/update payload.
    type Draft: Serialize + Debug + Send + Sync;

    /// Collection path under the API root, e.g. `employees`.
    const PATH: &'static str;

    fn id(&self) -> &Self::Id;
}

/// Paged list response, `{ "data": [...], "total": n }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64) -> Self {
        Self { data, total }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

/// Body of the status endpoint, `{ "status": ... }`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusUpdate<S> {
    pub status: S,
}
