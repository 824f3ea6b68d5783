//! DataTable Component
//!
//! A reusable data table: columns, local row model, pagination and filter bar.

pub mod column;
pub mod data_provider;
pub mod data_table;
pub mod filter_bar;
pub mod pagination;

pub use column::Column;
pub use data_provider::VecDataProvider;
pub use data_table::{DataTable, DataTableEvent};
pub use filter_bar::{FilterBar, FilterBarEvent};
pub use pagination::Pagination;
