pub mod engine;
pub mod field;
pub mod hook;

pub use engine::{FilterValue, Filters, SearchEngine, SearchOptions, SearchState};
pub use field::{FieldValue, Queryable};
pub use hook::{use_local_search, LocalSearch};
