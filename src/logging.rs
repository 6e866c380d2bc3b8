//! Logger setup for the CLI tools.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the global logger once.
///
/// The level comes from `QRPAY_LOG_LEVEL` or `RUST_LOG`, defaulting to
/// `warn` so library diagnostics stay quiet unless asked for. Repeated
/// calls are no-ops.
pub fn init_logging() -> Result<(), fern::InitError> {
    let mut init_result = Ok(());
    INIT.call_once(|| {
        init_result = init_logging_inner();
    });
    init_result
}

fn init_logging_inner() -> Result<(), fern::InitError> {
    let level = std::env::var("QRPAY_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let level = level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Warn);

    fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
