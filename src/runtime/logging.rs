use std::path::Path;
use std::time::SystemTime;

use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Install the global logger.
///
/// Console output goes to stderr so it never interleaves with shell output
/// on stdout. The optional file gets its own, usually more verbose, level.
pub fn setup_logging(
    level: LevelFilter,
    file: Option<&Path>,
    file_level: LevelFilter,
) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let console = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    let mut root = fern::Dispatch::new().chain(console);

    if let Some(path) = file {
        let log_file = fern::log_file(path)
            .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;
        let file_dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    humantime::format_rfc3339_seconds(SystemTime::now()),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(file_level)
            .chain(log_file);
        root = root.chain(file_dispatch);
    }

    root.apply()
        .map_err(|e| eyre!("Failed to install logger: {e}"))
}
