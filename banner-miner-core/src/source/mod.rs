//! Where records come from: rotated access-log files or the tracking store.

pub mod file;
pub mod store;

pub use file::{LogRecords, is_compressed, open_log};
pub use store::{MemoryStore, TimeRange, TrackingRow, TrackingStore, connect_store};
