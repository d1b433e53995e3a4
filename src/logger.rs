use crate::config::AppConfig;
use crate::errors::ReportError;
use log::LevelFilter;
use std::path::Path;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";
const ROLL_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_RETENTION: usize = 7;

/// Maps `off|error|warn|info|debug|trace` (any case) to a filter; anything else is `Info`.
#[must_use]
pub fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.unwrap_or("info").to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Routes all logging to `{dir}/catch2html.log`, rolling at 10 MiB and keeping
/// `retention` old files (default 7).
///
/// # Errors
/// Returns `ReportError::Logging` if the directory cannot be created, the
/// appender cannot be built, or a logger is already installed.
pub fn configure_logging(
    dir: &Path,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<(), ReportError> {
    use log4rs::append::rolling_file::RollingFileAppender;
    use log4rs::append::rolling_file::policy::compound::{
        CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
    };
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    std::fs::create_dir_all(dir).map_err(logging_err)?;
    let keep = u32::try_from(retention.unwrap_or(DEFAULT_RETENTION)).unwrap_or(u32::MAX);
    let roller = FixedWindowRoller::builder()
        .build(&format!("{}", dir.join("catch2html.{}.log").display()), keep)
        .map_err(logging_err)?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE)), Box::new(roller));
    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(dir.join("catch2html.log"), Box::new(policy))
        .map_err(logging_err)?;
    let config = Config::builder()
        .appender(Appender::builder().build("app", Box::new(appender)))
        .build(Root::builder().appender("app").build(parse_level(level)))
        .map_err(logging_err)?;
    log4rs::init_config(config).map_err(logging_err)?;
    Ok(())
}

fn logging_err(e: impl std::fmt::Display) -> ReportError {
    ReportError::Logging(e.to_string())
}

/// Configures logging if `cfg` names a log directory; otherwise leaves logging off.
/// Returns whether a logger was installed.
///
/// # Errors
/// See [`configure_logging`].
pub fn init_from_config(cfg: &AppConfig) -> Result<bool, ReportError> {
    let Some(dir) = cfg.log_dir.as_deref() else {
        return Ok(false);
    };
    configure_logging(dir, cfg.log_level.as_deref(), cfg.log_retention)?;
    Ok(true)
}
