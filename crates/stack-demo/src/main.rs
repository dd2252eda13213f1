//! # Stack Demo
//!
//! Drives a `BoundedStack<i32>` through its whole lifecycle:
//!
//! 1. Load configuration (defaults, overridden from env)
//! 2. Fill the stack until it reports overflow
//! 3. Show that a clone is independent of its source
//! 4. Move the buffer out, then swap two stacks
//! 5. Drain until underflow

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bounded_stack::{BoundedStack, StackConfig};

/// Values pushed by the demo, in order.
const SAMPLE_VALUES: [i32; 7] = [1, 3, 4, 2, 6, 5, 0];

/// Environment variable overriding the stack capacity.
const CAPACITY_VAR: &str = "STACK_DEMO_CAPACITY";

/// Environment variable overriding the capacity ceiling.
const MAX_CAPACITY_VAR: &str = "STACK_DEMO_MAX_CAPACITY";

/// Log level used when `RUST_LOG` is unset.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the log filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_LOG_LEVEL`].
fn log_filter(directives: Option<String>) -> Result<EnvFilter> {
    match directives {
        Some(raw) => EnvFilter::try_new(&raw).with_context(|| format!("Invalid RUST_LOG: {}", raw)),
        None => EnvFilter::try_new(DEFAULT_LOG_LEVEL).context("Invalid default log level"),
    }
}

/// Load configuration from environment.
fn load_config() -> StackConfig {
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Apply overrides from `lookup` on top of the default configuration.
///
/// Unparsable values are logged and ignored.
fn config_from_lookup<F>(lookup: F) -> StackConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = StackConfig::default();

    if let Some(raw) = lookup(CAPACITY_VAR) {
        match raw.trim().parse() {
            Ok(capacity) => config.capacity = capacity,
            Err(e) => warn!("{} is not a valid capacity ({}): {}", CAPACITY_VAR, raw, e),
        }
    }
    if let Some(raw) = lookup(MAX_CAPACITY_VAR) {
        match raw.trim().parse() {
            Ok(max) => config.max_capacity = max,
            Err(e) => warn!("{} is not a valid capacity ({}): {}", MAX_CAPACITY_VAR, raw, e),
        }
    }

    config
}

/// Push values until the stack is full; returns how many were accepted.
fn fill(stack: &mut BoundedStack<i32>, values: &[i32]) -> usize {
    let mut accepted = 0;
    for &value in values {
        match stack.push(value) {
            Ok(()) => accepted += 1,
            Err(e) => {
                warn!(value, "{}", e);
                break;
            }
        }
    }
    accepted
}

/// Pop everything, returning the values in pop order.
fn drain(stack: &mut BoundedStack<i32>) -> Vec<i32> {
    let mut popped = Vec::with_capacity(stack.len());
    loop {
        match stack.pop() {
            Ok(value) => popped.push(value),
            Err(e) => {
                info!("Drain finished: {}", e);
                break;
            }
        }
    }
    popped
}

fn run(config: &StackConfig) -> Result<()> {
    let mut stack =
        BoundedStack::from_config(config).context("Invalid stack configuration")?;
    info!(capacity = stack.capacity(), "Created stack");

    let accepted = fill(&mut stack, &SAMPLE_VALUES);
    info!(accepted, full = stack.is_full(), "Filled stack");
    if let Ok(top) = stack.top() {
        info!(top, "Top after fill");
    }

    let copy = stack.clone();
    let popped = drain(&mut stack);
    info!(?popped, copy_len = copy.len(), "Copy unaffected by draining source");

    let mut source = copy;
    let mut moved = BoundedStack::take_from(&mut source);
    info!(
        moved_len = moved.len(),
        source_capacity = source.capacity(),
        "Moved buffer out of source"
    );

    let mut small = BoundedStack::new(1);
    small.push(42).context("Fresh stack of capacity 1 must accept a push")?;
    moved.swap(&mut small);
    info!(
        moved_capacity = moved.capacity(),
        small_capacity = small.capacity(),
        "Swapped stacks"
    );

    let rest = drain(&mut small);
    info!(?rest, "Drained swapped stack");

    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok())?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config();
    info!(
        capacity = config.capacity,
        max_capacity = config.max_capacity,
        "Loaded configuration"
    );

    run(&config)
}
