pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod registry;
pub mod resources;
pub mod service;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod operations_tests;
#[cfg(test)]
mod resources_tests;

pub use error::ToolError;
pub use registry::{invoke, list_operations, Operation, Value};
pub use service::ToolService;
