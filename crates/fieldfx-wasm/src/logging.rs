//! Forwards `tracing` events from the core to the browser console.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Install the console subscriber. Later calls (a second mounted field)
/// keep the first one.
pub fn init() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(Level::INFO)
        .without_time()
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sink {
    Log,
    Warn,
    Error,
}

impl Sink {
    fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            Sink::Error
        } else if *level == Level::WARN {
            Sink::Warn
        } else {
            Sink::Log
        }
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Sink::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(Sink::for_level(meta.level()))
    }
}

/// Buffers one formatted event and emits it as a single console call on drop.
struct ConsoleWriter {
    sink: Sink,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(sink: Sink) -> Self {
        Self { sink, buf: Vec::new() }
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
        let line = message(&self.buf);
        if line.is_empty() {
            return;
        }
        let line = format!("fieldfx: {line}").into();
        match self.sink {
            Sink::Log => web_sys::console::log_1(&line),
            Sink::Warn => web_sys::console::warn_1(&line),
            Sink::Error => web_sys::console::error_1(&line),
        }
    }
}

/// Formatted event text without the trailing newline.
fn message(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).trim_end().to_owned()
}
