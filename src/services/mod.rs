//! Service Layer
//!
//! Network access for the UI: the REST client, the data source adapter used by
//! server-side tables, the user directory, and the tokio bridge they run on.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ServiceHub                              │
//! │  ┌─────────────┐  ┌──────────────┐  ┌──────────────────┐    │
//! │  │ RestClient  │  │  DataSource  │  │  UserDirectory   │    │
//! │  │  (reqwest)  │  │ (paged rows) │  │  (list / detail) │    │
//! │  └─────────────┘  └──────────────┘  └──────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ Result<PageResponse>
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      State Layer                             │
//! │                (TableState, UsersState, ...)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod data_source;
pub mod http;
pub mod runtime;
pub mod service_hub;
pub mod users;

pub use data_source::{DataSource, DataSourceConfig};
pub use http::RestClient;
pub use runtime::*;
pub use service_hub::ServiceHub;
pub use users::UserDirectory;
