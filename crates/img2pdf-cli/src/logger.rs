use chrono::Local;
use indicatif::MultiProgress;
use log::{Level, LevelFilter, Metadata, Record};

/// Writes log records to stderr, above the progress bar
pub struct StderrLogger {
    level: LevelFilter,
    terminal: MultiProgress,
}

impl StderrLogger {
    /// `verbosity` counts `-v` flags: warn, info, debug, trace
    pub fn new(verbosity: u8, terminal: MultiProgress) -> Self {
        let level = match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self { level, terminal }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        let line = format!(
            "{} {} [{}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            level,
            record.target(),
            record.args()
        );
        // Hide any live bar while writing so the line is not overdrawn
        self.terminal.suspend(|| eprintln!("{line}"));
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::{ProgressBar, ProgressDrawTarget};
    use log::Log;

    fn hidden_terminal() -> MultiProgress {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn test_verbosity_selects_level() {
        let quiet = StderrLogger::new(0, hidden_terminal());
        let info = Metadata::builder().level(Level::Info).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(quiet.enabled(&warn));
        assert!(!quiet.enabled(&info));

        let debug = StderrLogger::new(2, hidden_terminal());
        assert!(debug.enabled(&Metadata::builder().level(Level::Debug).build()));
        assert!(!debug.enabled(&Metadata::builder().level(Level::Trace).build()));
    }

    #[test]
    fn test_logging_leaves_live_bar_intact() {
        let terminal = hidden_terminal();
        let bar = terminal.add(ProgressBar::new(4));
        bar.set_position(2);

        let logger = StderrLogger::new(3, terminal.clone());
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("img2pdf")
                .args(format_args!("placed page"))
                .build(),
        );

        assert_eq!(bar.position(), 2);
        assert_eq!(bar.length(), Some(4));
        assert!(!bar.is_finished());
    }
}
