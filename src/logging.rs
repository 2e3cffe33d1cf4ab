// Tracing setup shared by both binaries

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the fmt subscriber with a fixed `salary_by_team=info` filter.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(EnvFilter::new("salary_by_team=info"))
            .init();
    });
}
