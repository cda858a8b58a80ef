use std::fs::OpenOptions;
use std::io::Write;
use std::panic;
use std::path::{Path, PathBuf};

use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};

/// Initialize the terminal and file loggers.
///
/// Loggers are created at Debug and the effective level starts at Info via
/// the global max-level filter, so logging works before the configuration
/// is read; `set_verbose` raises it afterwards. File logging goes to
/// logs/app.log under the given root. If the log file cannot be created we
/// degrade to terminal-only logging rather than fail startup.
pub fn init(root_dir: &Path) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log::LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    let log_dir = root_dir.join("logs");
    if !log_dir.exists() {
        let _ = std::fs::create_dir_all(&log_dir);
    }

    match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("app.log"))
    {
        Ok(file) => loggers.push(WriteLogger::new(
            log::LevelFilter::Debug,
            Config::default(),
            file,
        )),
        Err(e) => eprintln!("Failed to open app.log, logging to terminal only: {}", e),
    }

    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    log::set_max_level(log::LevelFilter::Info);
}

/// Apply the configured verbosity once the configuration has been loaded
pub fn set_verbose(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    log::set_max_level(level);
}

/// Setup panic hook to log crashes to logs/crash.log
/// Note: the hook writes the file directly so a crash is recorded even if
/// the logger itself is in a bad state.
pub fn setup_panic_hook(root_dir: PathBuf) {
    panic::set_hook(Box::new(move |info| {
        let msg = format!(
            "{}\nBacktrace: {:?}\n",
            info,
            std::backtrace::Backtrace::capture()
        );
        eprintln!("{}", msg); // Always print to stderr

        let crash_file = root_dir.join("logs").join("crash.log");
        if let Some(parent) = crash_file.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(crash_file) {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "[{}] {}", timestamp, msg);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_verbose_adjusts_max_level() {
        set_verbose(true);
        assert_eq!(log::max_level(), log::LevelFilter::Debug);

        set_verbose(false);
        assert_eq!(log::max_level(), log::LevelFilter::Info);
    }
}
