//! Line-oriented loggers writing `[LEVEL] message`

use std::io::{self, Write};

use parking_lot::Mutex;

use super::{DEFAULT_FATAL_EXIT_CODE, Logger};

/// Logger that writes one tagged line per message to any writer
#[derive(Debug)]
pub struct WriterLogger<W: Write + Send> {
    writer: Mutex<W>,
    exit_code: i32,
}

/// The default process logger: tagged lines on standard output
pub type ConsoleLogger = WriterLogger<io::Stdout>;

impl<W: Write + Send> WriterLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            exit_code: DEFAULT_FATAL_EXIT_CODE,
        }
    }

    /// Set the exit code reported after a fatal message
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn emit(&self, tag: &str, message: &str) {
        let mut writer = self.writer.lock();
        // A log sink has nowhere to report its own write failures.
        let _ = writeln!(writer, "[{tag}] {message}");
        let _ = writer.flush();
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Logger for WriterLogger<W> {
    fn debug(&self, message: &str) {
        self.emit("DEBUG", message);
    }

    fn warn(&self, message: &str) {
        self.emit("WARN", message);
    }

    fn error(&self, message: &str) {
        self.emit("ERROR", message);
    }

    fn fatal(&self, message: &str) {
        self.emit("FATAL", message);
    }

    fn exit_code(&self) -> i32 {
        self.exit_code
    }
}
