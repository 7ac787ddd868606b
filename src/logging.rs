// SPDX-License-Identifier: MIT
//
// Tracing subscriber setup. Events go to stderr so that palette, report and
// export output on stdout can be piped untouched.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber at `level`.
///
/// A second call is a no-op, which keeps tests that touch logging
/// independent of each other.
pub fn init(level: Level) {
    let filter = EnvFilter::default().add_directive(LevelFilter::from_level(level).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
