pub mod error;

pub use error::{CpviewError, Result};
