//! Tracing setup for diagnosing graph construction.
//!
//! ```bash
//! DTSGEN_LOG=debug dtsgen generate metadata.json     # skipped types
//! DTSGEN_LOG=dtsgen_lib=trace dtsgen graph metadata.json   # every admission decision
//! ```
//!
//! The subscriber is only installed when `DTSGEN_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::EnvFilter;

/// Filter from `DTSGEN_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("DTSGEN_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber. Output goes to stderr so declarations
/// written to stdout stay clean.
pub fn init_tracing() {
    let has_dtsgen_log = std::env::var("DTSGEN_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_dtsgen_log && !has_rust_log {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
