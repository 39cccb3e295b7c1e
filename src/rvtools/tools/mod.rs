pub mod config;
pub mod convert;
pub mod discover;
pub mod error;
pub mod io;
pub mod metadata;
pub mod model;
pub mod naming;
pub mod order;
pub mod style;

pub use config::ConvertOptions;
pub use error::{Result, ToolError};
