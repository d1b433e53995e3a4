mod command;
mod runner;
mod util;

pub use command::Command;
pub use runner::{ConvertReport, run};
pub use util::{normalize_newlines, read_report};
