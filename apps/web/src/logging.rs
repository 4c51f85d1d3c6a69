//! Routes `tracing` output to the browser console.
//!
//! Each formatted event is buffered and handed to the console method matching
//! its level when the writer is dropped. There is no system clock on
//! `wasm32-unknown-unknown`, so timestamps are left to the console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = console_line(&self.buffer) else {
            return;
        };

        let message = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            _ => web_sys::console::debug_1(&message),
        }
    }
}

/// One formatted event without its trailing newline; `None` when blank
fn console_line(buffer: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(buffer);
    let line = line.trim_end();
    (!line.is_empty()).then(|| line.to_string())
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// Installs the console subscriber. `verbose` lowers the threshold to DEBUG.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // A second init (e.g. hot reload) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::console_line;

    #[test]
    fn trailing_newline_is_stripped() {
        assert_eq!(
            console_line(b" INFO project_board: Loaded project list count=3\n").as_deref(),
            Some(" INFO project_board: Loaded project list count=3")
        );
    }

    #[test]
    fn blank_output_is_skipped() {
        assert_eq!(console_line(b""), None);
        assert_eq!(console_line(b"\n"), None);
    }
}
