pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod conf;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod record;
pub mod source;
