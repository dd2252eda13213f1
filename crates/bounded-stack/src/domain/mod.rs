//! Domain Layer - the container and its sizing configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No operation blocks

pub mod bounded_stack;
pub mod config;

pub use bounded_stack::BoundedStack;
pub use config::{StackConfig, StackConfigBuilder, DEFAULT_CAPACITY, DEFAULT_MAX_CAPACITY};
