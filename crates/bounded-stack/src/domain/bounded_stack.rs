//! Core bounded stack implementation
//!
//! INVARIANTS:
//! - `0 <= len <= capacity` at all times
//! - The top element, when present, is the last live element
//! - A failed operation leaves the stack untouched
//! - A moved-from stack has `len == 0` and `capacity == 0` and owns no allocation

use std::fmt;
use std::mem;

use tracing::{debug, trace};

use super::config::StackConfig;
use crate::error::{ConfigError, StackError};

/// Fixed-capacity last-in-first-out container.
///
/// The capacity is chosen at construction and never changes; the buffer is
/// allocated once and never grows. Cloning produces an independent deep copy,
/// while [`take_from`](Self::take_from) and [`assign_take`](Self::assign_take)
/// hand the buffer over without touching any element.
pub struct BoundedStack<T> {
    /// Live elements, bottom to top. Never grows past `capacity`.
    storage: Vec<T>,
    /// Maximum number of elements (fixed for the buffer's lifetime)
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack that can hold `capacity` elements.
    ///
    /// A capacity of 0 is legal and yields a stack that is both empty and full.
    ///
    /// # Panics
    ///
    /// Panics if the buffer for `capacity` elements cannot be allocated
    /// (e.g. its size in bytes overflows `isize::MAX`). Use
    /// [`from_config`](Self::from_config) to bound the capacity up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an empty stack sized by a validated configuration.
    pub fn from_config(config: &StackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Move-construct: take ownership of `source`'s buffer.
    ///
    /// No element is cloned or dropped. `source` is left as an empty
    /// zero-capacity stack that owns no allocation.
    pub fn take_from(source: &mut Self) -> Self {
        trace!(
            capacity = source.capacity,
            len = source.len(),
            "Transferring stack buffer"
        );
        mem::take(source)
    }

    /// Move-assign: release this stack's buffer and take over `source`'s.
    ///
    /// `source` is left as an empty zero-capacity stack.
    pub fn assign_take(&mut self, source: &mut Self) {
        *self = Self::take_from(source);
    }

    /// Exchange capacity and buffer ownership with `other` in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.storage, &mut other.storage);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// True iff the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// True iff the stack holds `capacity` elements.
    pub fn is_full(&self) -> bool {
        self.storage.len() == self.capacity
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left before the stack is full.
    pub fn remaining(&self) -> usize {
        self.capacity - self.storage.len()
    }

    /// Push a value, taking ownership of it.
    ///
    /// Fails with [`StackError::Overflow`] when full; `value` is dropped in
    /// that case and the stack is unchanged.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(self.reject_overflow("push"));
        }
        self.storage.push(value);
        Ok(())
    }

    /// Construct an element from `args` directly into the next slot.
    ///
    /// The conversion only runs when there is room.
    pub fn emplace<A>(&mut self, args: A) -> Result<(), StackError>
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Construct an element with `make` directly into the next slot.
    ///
    /// `make` is not called when the stack is full.
    pub fn emplace_with<F>(&mut self, make: F) -> Result<(), StackError>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            return Err(self.reject_overflow("emplace"));
        }
        self.storage.push(make());
        Ok(())
    }

    /// Remove the top element and hand it back.
    pub fn pop(&mut self) -> Result<T, StackError> {
        match self.storage.pop() {
            Some(value) => Ok(value),
            None => Err(self.reject_underflow("pop")),
        }
    }

    /// Borrow the top element without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.storage
            .last()
            .ok_or_else(|| self.reject_underflow("peek"))
    }

    fn reject_overflow(&self, op: &'static str) -> StackError {
        debug!(op, capacity = self.capacity, "Rejected: stack is full");
        StackError::Overflow {
            capacity: self.capacity,
        }
    }

    fn reject_underflow(&self, op: &'static str) -> StackError {
        debug!(op, capacity = self.capacity, "Rejected: stack is empty");
        StackError::Underflow
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Push a copy of `value`.
    ///
    /// The clone is only made when there is room.
    pub fn push_cloned(&mut self, value: &T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(self.reject_overflow("push_cloned"));
        }
        self.storage.push(value.clone());
        Ok(())
    }

    /// Copy of the top element. Does not change the length.
    pub fn top(&self) -> Result<T, StackError> {
        self.peek().cloned()
    }

    /// Copy-assign: replace this stack with a deep copy of `other`.
    ///
    /// The full copy is built before anything in `self` changes, then swapped
    /// in. If cloning an element panics, `self` is left as it was.
    pub fn assign(&mut self, other: &Self) {
        let mut copy = other.clone();
        self.swap(&mut copy);
    }
}

impl<T: Clone> Clone for BoundedStack<T> {
    fn clone(&self) -> Self {
        let mut storage = Vec::with_capacity(self.capacity);
        storage.extend(self.storage.iter().cloned());
        Self {
            storage,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

/// The moved-from state: zero capacity, no allocation.
impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self {
            storage: Vec::new(),
            capacity: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity)
            .field("elements", &self.storage)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for BoundedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.storage == other.storage
    }
}

impl<T: Eq> Eq for BoundedStack<T> {}
