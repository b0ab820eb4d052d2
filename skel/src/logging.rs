//! Diagnostic logging for the `skel` binary.
//!
//! Logging is off unless a filter is given with `--log`. Filters use
//! `RUST_LOG` syntax, for example `debug` or `skelgen_codegen_java=trace`.
//!
//! Events go to stderr; stdout carries the command reports.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber when `--log` is given.
pub fn init(flag: Option<&str>) {
    let Some(filter) = filter(flag) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn filter(flag: Option<&str>) -> Option<EnvFilter> {
    flag.map(|directives| EnvFilter::builder().parse_lossy(directives))
}
