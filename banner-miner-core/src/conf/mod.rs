mod layout;
mod loader;
#[cfg(test)]
mod tests;

pub use layout::{InputConfig, LogLayout, StoreConfig};
pub use loader::{MinerConfig, load_config};
