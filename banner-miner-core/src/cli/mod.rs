mod mine;
mod run;

pub use mine::{FileArgs, MineCmd, StoreArgs};
pub use run::{run_file, run_mine, run_store};
