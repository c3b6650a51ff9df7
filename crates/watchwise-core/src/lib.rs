pub mod search;
pub mod store;
pub mod summary;

pub use search::{SearchSession, SearchState, SearchTicket, MIN_QUERY_LEN};
pub use store::WatchedStore;
pub use summary::WatchedSummary;
