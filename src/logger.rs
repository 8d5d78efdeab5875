// src/logger.rs
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::LevelFilter;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Level for `-q` / `-v` counts: quiet wins, then info, debug, trace.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Install the stderr logger: `[hh:mm:ss.mmm][LEVEL] msg`.
/// `RUST_LOG` overrides `default`. Safe to call more than once.
pub fn init(default: LevelFilter) {
    start();
    let _ = env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}
