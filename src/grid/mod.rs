// Grid engine - server-side search, sort and paging for listing endpoints
//
// Each record type declares its searchable fields and a name -> comparator column
// table; the engine applies search, then sort, then paging.
pub mod columns;
pub mod engine;
pub mod request;

pub use columns::{SortColumn, SortColumns};
pub use engine::{GridEngine, GridPage, GridRecord, DEFAULT_MAX_PAGE_LENGTH};
pub use request::{GridRequest, SortDirection, SortOrder};
