//! Tracing subscriber for the engine's test binaries.
//!
//! Unit tests install it through a `ctor` hook in the engine crate;
//! integration binaries do the same from `tests/common`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when no filter variable is set or the one set does not parse.
/// Still shows the session's warnings (clock without a runtime, failed
/// deal task).
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Consulted in order; the first non-blank value wins.
const FILTER_VARS: [&str; 2] = ["TEST_LOG", "RUST_LOG"];

static INSTALLED: OnceCell<bool> = OnceCell::new();

/// Install the subscriber once per process.
///
/// Returns whether this process ended up with our subscriber. `false`
/// means another global subscriber got there first.
///
/// `TEST_LOG=spider_engine=debug` shows every applied, rejected and
/// undone command.
pub fn init() -> bool {
    *INSTALLED.get_or_init(|| {
        let directive = filter_directive(|name| std::env::var(name).ok());
        let filter =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .compact()
            .try_init()
            .is_ok()
    })
}

/// Pick the filter directive from `lookup` (an env reader in practice).
fn filter_directive(lookup: impl Fn(&str) -> Option<String>) -> String {
    FILTER_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_owned())
}
