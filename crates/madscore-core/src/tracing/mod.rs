//! Observability for madscore.
//! `tracing` crate with `EnvFilter`, filter read from `MADSCORE_LOG`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_filter};
