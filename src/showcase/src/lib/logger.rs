use slog::{Drain, Level, Logger};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

/// The logging mode to use.
pub enum LoggingMode {
    /// The default mode for logging; output without any decoration, to STDERR.
    Stderr,

    /// Tee logging to a file (in addition to STDERR).
    Tee(PathBuf),

    /// Output Debug logs and up to a file, regardless of verbosity, keep the STDERR output
    /// the same (with verbosity).
    File(PathBuf),
}

/// A Slog formatter that prefixes warnings and errors with their level.
pub struct ShowcaseFormat<D>
where
    D: slog_term::Decorator,
{
    decorator: D,
}

impl<D: slog_term::Decorator> ShowcaseFormat<D> {
    pub fn new(decorator: D) -> ShowcaseFormat<D> {
        ShowcaseFormat { decorator }
    }
}

impl<D: slog_term::Decorator> slog::Drain for ShowcaseFormat<D> {
    type Ok = ();
    type Err = std::io::Error;

    fn log(
        &self,
        record: &slog::Record<'_>,
        values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        self.decorator.with_record(record, values, |decorator| {
            if record.level() <= slog::Level::Warning {
                decorator.start_level()?;
                write!(decorator, "{}: ", record.level().as_str())?;
                // start_whitespace resets to normal coloring after printing the level
                decorator.start_whitespace()?;
            }

            decorator.start_msg()?;
            write!(decorator, "{}", record.msg())?;

            decorator.start_whitespace()?;
            writeln!(decorator)?;

            decorator.flush()?;
            Ok(())
        })
    }
}

/// A logger that has written each record by the time the logging call
/// returns, so warnings reach the terminal ahead of any output that follows.
fn synchronous_logger<D>(decorator: D) -> Logger
where
    D: slog_term::Decorator + Send + 'static,
{
    Logger::root(Mutex::new(ShowcaseFormat::new(decorator)).fuse(), slog::o!())
}

fn create_drain(mode: LoggingMode) -> std::io::Result<Logger> {
    Ok(match mode {
        LoggingMode::Stderr => {
            synchronous_logger(slog_term::TermDecorator::new().stderr().build())
        }
        LoggingMode::File(out) => {
            let file = File::create(out)?;
            let decorator = slog_term::PlainDecorator::new(file);
            let drain = slog_term::FullFormat::new(decorator).build().fuse();
            Logger::root(slog_async::Async::new(drain).build().fuse(), slog::o!())
        }
        LoggingMode::Tee(out) => Logger::root(
            slog::Duplicate::new(
                create_drain(LoggingMode::Stderr)?,
                create_drain(LoggingMode::File(out))?,
            )
            .fuse(),
            slog::o!(),
        ),
    })
}

/// Maps `-v`/`-q` counts to a level. `None` means logging is off entirely.
pub fn log_level(verbose_level: i64) -> Option<Level> {
    match verbose_level {
        -3 => Some(Level::Critical),
        -2 => Some(Level::Error),
        -1 => Some(Level::Warning),
        0 => Some(Level::Info),
        1 => Some(Level::Debug),
        x if x > 0 => Some(Level::Trace),
        _ => None,
    }
}

/// Create a root logger.
/// The verbose_level can be negative, in which case it's a quiet mode which removes warnings,
/// then errors entirely.
pub fn create_root_logger(verbose_level: i64, mode: LoggingMode) -> std::io::Result<Logger> {
    let Some(level) = log_level(verbose_level) else {
        return Ok(Logger::root(slog::Discard, slog::o!()));
    };

    // Only the file drain is asynchronous; terminal output stays in step
    // with stdout.
    let drain = slog::LevelFilter::new(create_drain(mode)?, level).fuse();

    Ok(Logger::root(
        drain,
        slog::o!("version" => env!("CARGO_PKG_VERSION")),
    ))
}
