//! Process startup helpers.

mod tracing_init;

pub use tracing_init::{init, init_tracing};
