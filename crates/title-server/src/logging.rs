use std::io::Write;

/// Filter directives to log with: an explicit level (from `--log-level` or
/// `RUST_LOG`) wins over the debug flag.
pub fn log_filter(debug: bool, level: Option<&str>) -> &str {
    level
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(if debug { "debug" } else { "info" })
}

/// Initialise `env_logger` with a timestamped line format.
pub fn init_logging(debug: bool, level: Option<&str>) {
    env_logger::Builder::new()
        .parse_filters(log_filter(debug, level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// First `max_chars` characters of `text`, for logging user input.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
