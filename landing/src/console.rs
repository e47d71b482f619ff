//! Browser console plumbing: a `tracing` writer and the self-test reporter.

use std::io;

use marketly_page::selftest::Reporter;
use marketly_page::types::TestResult;
use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

const DEFAULT_FILTER: &str = "info,marketly_page=debug,marketly_landing=debug";

/// Routes `tracing` output to `console.*` by level.
pub fn init_tracing() {
    // No clock on wasm32-unknown-unknown, so no timestamps.
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .try_init();
    if let Err(err) = installed {
        tracing::debug!(error = %err, "keeping the tracing subscriber already installed");
    }
}

struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and flushes it as a single console call.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

/// Writes the self-test report as a `console.group`.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn group_start(&mut self, title: &str) {
        web_sys::console::group_1(&JsValue::from_str(title));
    }

    fn result(&mut self, result: &TestResult) {
        let line = format!("{}: {}", result.name, result.verdict());
        let details = result.details.as_deref().unwrap_or("");
        web_sys::console::log_2(&JsValue::from_str(&line), &JsValue::from_str(details));
    }

    fn group_end(&mut self) {
        web_sys::console::group_end();
    }
}
