use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    file: Option<Mutex<File>>,
}

impl Logger {
    fn new(prefix: Option<String>, file: Option<File>) -> Self {
        Self {
            prefix,
            file: file.map(Mutex::new),
        }
    }

    fn format(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {}", timestamp, prefix, message)
        } else {
            format!("[{}] {}", timestamp, message)
        }
    }

    pub fn log(&self, message: &str) {
        let line = self.format(message);
        match self.file {
            Some(ref file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", line);
                }
            }
            None => eprintln!("{}", line),
        }
    }
}

/// Sends log lines to stderr.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix, None));
}

/// Appends log lines to `path`, keeping the terminal free for the board.
pub fn init_file_logger(prefix: Option<String>, path: &Path) -> Result<(), String> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;
    LOGGER.get_or_init(|| Logger::new(prefix, Some(file)));
    Ok(())
}

/// Messages logged before initialisation are dropped, so library callers stay quiet.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
