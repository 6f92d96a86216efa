pub mod capture;
pub mod fixtures;

pub use capture::{CapturedEvent, EventLog, capture_events};
pub use fixtures::{LogFixture, loader_url, squid_line};
