#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    if let Err(error) = lunchwheel::run_from_env() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

/// Structured logs go to stderr so they never corrupt the spin view on
/// stdout. Filter via `LUNCHWHEEL_LOG` (falling back to `RUST_LOG`), e.g.
/// `LUNCHWHEEL_LOG=lunchwheel_runtime=debug`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("LUNCHWHEEL_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
