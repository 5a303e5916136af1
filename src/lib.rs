pub mod api;
pub mod config;
pub mod counter;
pub mod error;
pub mod loader;
pub mod samples;

pub use counter::{count_record_breaks, is_global_max, is_global_min, RecordBreaks};
pub use error::{RbResult, RecordError};
// cmd and reports are binary modules, see main.rs.
