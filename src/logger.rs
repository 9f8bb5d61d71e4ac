use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const LOG_FILE: &str = "tango_debug.log";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Open the debug log for appending. Safe to call more than once; later
/// calls are no-ops. Logging before init (or if the file cannot be opened)
/// silently drops messages - the trainer must keep working without a log.
pub fn init() {
    let mut logger = LOGGER.lock().unwrap();
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(LOG_FILE)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    if let Some(file) = LOGGER.lock().unwrap().as_mut() {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let _ = writeln!(
            file,
            "[{}.{:03}] {}",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_before_init_is_a_noop() {
        log("dropped without panicking");
    }

    #[test]
    fn test_init_then_log() {
        init();
        log("test message");
    }
}
