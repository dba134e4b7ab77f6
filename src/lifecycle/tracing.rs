//! Observability setup.
//!
//! Structured logging with the `tracing` crate. Actors log lifecycle events
//! with an `entity_type` field instead of module paths, so the subscriber
//! hides targets and uses the compact format. Levels are controlled through
//! `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run    # compact workflow logs
//! RUST_LOG=debug cargo run   # full payloads at function entry
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
