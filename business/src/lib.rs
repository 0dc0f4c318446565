//! Business layer of the back-office client.
//!
//! Everything here is UI-agnostic: records and their REST collections, the
//! pagination window, list queries, the entity cache, and the controller that
//! owns a list screen's authoritative paging state.

pub mod api;
pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod model;
pub mod pagination;
pub mod query;

pub use api::ResourceClient;
pub use cache::{Clock, EntityCache, FixedClock, SystemClock, TtlCache};
pub use config::BusinessConfig;
pub use controller::{PageOutcome, PaginationController};
pub use error::{ApiError, ApiResult, ConfigError};
pub use http::HttpClient;
pub use model::{
    Employee, EmployeeDraft, EmployeeRole, Enterprise, EnterpriseDraft, Page, Resource, Status,
    StatusUpdate, Subsidiary, SubsidiaryDraft, TransportRequest, TransportRequestDraft,
    TransportStatus,
};
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageChange, PageWindow};
pub use query::{FilterMap, ListQuery};
