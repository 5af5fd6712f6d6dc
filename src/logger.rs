use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

/// Shared by every binary; lines are tagged with the script that wrote them.
pub const LOG_FILE_NAME: &str = "yellow-seed.log";

// stdout carries the SQL, so logs only ever go to the file.
static SINK: OnceLock<Sink> = OnceLock::new();
static LEVEL: OnceLock<LogLevel> = OnceLock::new();

struct Sink {
    tag: String,
    file: Mutex<File>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn parse(s: &str) -> LogLevel {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    fn from_env() -> LogLevel {
        LogLevel::parse(&std::env::var("YELLOW_SEED_LOG").unwrap_or_default())
    }

    fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Open `<config_dir>/yellow-seed.log` for appending, creating the directory
/// if needed. Only the first call in a process takes effect.
pub fn init(config_dir: &Path, tag: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(config_dir)?;
    let path = config_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let _ = SINK.set(Sink {
        tag: tag.to_string(),
        file: Mutex::new(file),
    });
    let _ = LEVEL.set(LogLevel::from_env());
    debug(&format!("logging to {}", path.display()));
    Ok(path)
}

/// Interpolated hosts are never escaped; a quote in one breaks the SQL.
pub fn check_host(host: &str) {
    if host.contains('\'') {
        warn(&format!("host {:?} contains a single quote; the emitted SQL is invalid", host));
    } else if host.is_empty() {
        warn("empty host; fixtures are emitted for the domain ''");
    }
}

fn now_ts() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn log(level: LogLevel, msg: &str) {
    if level < *LEVEL.get_or_init(LogLevel::from_env) {
        return;
    }
    if let Some(sink) = SINK.get() {
        if let Ok(mut f) = sink.file.lock() {
            let _ = writeln!(f, "{} [{}] {}: {}", now_ts(), level.label(), sink.tag, msg);
            let _ = f.flush();
        }
    }
}

pub fn error(msg: &str) {
    log(LogLevel::Error, msg);
}
pub fn warn(msg: &str) {
    log(LogLevel::Warn, msg);
}
pub fn info(msg: &str) {
    log(LogLevel::Info, msg);
}
pub fn debug(msg: &str) {
    log(LogLevel::Debug, msg);
}
pub fn trace(msg: &str) {
    log(LogLevel::Trace, msg);
}
