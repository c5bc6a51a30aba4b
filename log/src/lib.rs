use std::sync::Mutex;

use slog::Drain;
use slog::Fuse;
use slog_async::Async;
use slog_json::Json;

pub use slog::{debug, error, info, o, trace, warn, Logger};

/// Creates the process-wide logger: JSON records on stderr, tagged with
/// the build identity from `info`.
pub fn initialize_logger() -> slog::Logger {
    let drain = Mutex::new(Json::default(std::io::stderr())).map(Fuse);
    let drain = Async::new(drain).build().fuse();

    Logger::root(
        drain,
        o!("version" => info::VERSION, "revision" => info::REVISION, "build_timestamp" => info::BUILD_TIMESTAMP),
    )
}

/// Creates a logger that drops every record. For tests that exercise
/// logger-taking APIs without caring about output.
pub fn initialize_discard_logger() -> slog::Logger {
    Logger::root(slog::Discard, o!())
}
