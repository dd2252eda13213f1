//! # Bounded Stack
//!
//! Fixed-capacity last-in-first-out container with value semantics.
//!
//! ## Layout
//!
//! - **Domain Layer** (`domain/`): Pure data structure, no I/O
//!   - `BoundedStack`: the container
//!   - `StackConfig`: sizing configuration with validation
//!   - `StackConfigBuilder`: fluent builder for configuration
//!
//! - **Errors** (`error`): `StackError` for overflow/underflow,
//!   `ConfigError` for configuration validation
//!
//! ## Invariants
//!
//! - **Bounded**: `0 <= len <= capacity`, capacity fixed for the buffer's lifetime
//! - **LIFO**: `pop` returns elements in the reverse order they were pushed
//! - **Fail-fast**: overflow and underflow are reported before anything changes
//! - **Value semantics**: `clone` is a deep copy; `take_from` moves the buffer
//!   and leaves the source at zero capacity
//!
//! ## Usage Example
//!
//! ```
//! use bounded_stack::{BoundedStack, StackError};
//!
//! let mut stack = BoundedStack::new(2);
//! stack.push(1)?;
//! stack.push(2)?;
//! assert_eq!(stack.push(3), Err(StackError::Overflow { capacity: 2 }));
//! assert_eq!(stack.top()?, 2);
//!
//! let copy = stack.clone();
//! stack.pop()?;
//! assert_eq!(copy.len(), 2);
//!
//! let moved = BoundedStack::take_from(&mut stack);
//! assert_eq!(moved.len(), 1);
//! assert_eq!(stack.capacity(), 0);
//! # Ok::<(), StackError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{BoundedStack, StackConfig, StackConfigBuilder};
pub use error::{ConfigError, StackError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
