//! Installs the `fern` logger that backs the [`log`] macros used across the
//! crate.
//!
//! Library code only ever calls `debug!`, `info!` and friends; nothing is
//! printed until an executable calls [`setup_logging`]. Records look like
//!
//! ```text
//! [2024-05-01 12:00:00.123][rapid_snake::game][INFO] Rachid ate at (12, 7), length 4
//! ```
//!
//! [`log`]: https://docs.rs/log/0.4/log/

use std::io;

use crate::error::SnakeResult;

/// Crates whose chatter is capped at `Warn` whatever the configured level.
const NOISY_TARGETS: &[&str] = &["wgpu_core", "wgpu_hal", "naga", "winit"];

/// Render one record the way [`setup_logging`] prints it.
pub fn format_record(
    timestamp: &chrono::DateTime<chrono::Local>,
    target: &str,
    level: log::Level,
    message: &std::fmt::Arguments,
) -> String {
    format!(
        "[{}][{}][{}] {}",
        timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        target,
        level,
        message
    )
}

/// Send records at `level` and above to stdout.
///
/// Fails if a logger is already installed.
pub fn setup_logging(level: log::LevelFilter) -> SnakeResult {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, msg, rec| {
            out.finish(format_args!(
                "{}",
                format_record(&chrono::Local::now(), rec.target(), rec.level(), msg)
            ))
        })
        .level(level);
    for target in NOISY_TARGETS {
        dispatch = dispatch.level_for(*target, level.min(log::LevelFilter::Warn));
    }
    dispatch.chain(io::stdout()).apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn records_carry_time_target_and_level() {
        let ts = chrono::Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let line = format_record(&ts, "rapid_snake::game", log::Level::Info, &format_args!("hello {}", 1));
        assert_eq!(
            line,
            "[2024-05-01 12:00:00.000][rapid_snake::game][INFO] hello 1"
        );
    }
}
