//! Error types for the bounded stack

use thiserror::Error;

/// Boundary violations raised by stack operations.
///
/// Both variants are raised before any state is touched, so a stack that
/// returned an error is exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// Push or emplace on a stack whose length equals its capacity.
    #[error("Stack overflow: capacity {capacity} reached")]
    Overflow { capacity: usize },

    /// Pop, top or peek on an empty stack.
    #[error("Stack underflow: stack is empty")]
    Underflow,
}

/// Errors from validating a [`StackConfig`](crate::StackConfig).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Capacity exceeds maximum: {capacity} > {max}")]
    CapacityTooLarge { capacity: usize, max: usize },

    #[error("Invalid max capacity: must be greater than 0")]
    InvalidMaxCapacity,
}
