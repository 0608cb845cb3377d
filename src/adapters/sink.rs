use crate::domain::model::Diagnostic;
use crate::domain::ports::DiagnosticSink;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Sink selection as it appears in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Tracing,
    Stderr,
}

impl SinkKind {
    pub fn build(self) -> Box<dyn DiagnosticSink> {
        match self {
            SinkKind::Tracing => Box::new(TracingSink),
            SinkKind::Stderr => Box::new(StderrSink),
        }
    }
}

/// Writes one diagnostic as `[hook] timestamp` followed by the cause chain.
pub fn write_diagnostic<W: Write>(writer: &mut W, diagnostic: &Diagnostic) -> io::Result<()> {
    writeln!(
        writer,
        "[{}] {}",
        diagnostic.hook,
        diagnostic.occurred_at.to_rfc3339()
    )?;
    writeln!(writer, "{}", diagnostic.detail)?;
    writer.flush()
}

/// Logs through `tracing`. Without any installed subscriber the event would be
/// dropped, so it goes to stderr instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    fn emit_or_fallback<W: Write>(&self, diagnostic: &Diagnostic, fallback: &mut W) {
        if tracing::dispatcher::has_been_set() {
            tracing::error!(
                hook = %diagnostic.hook,
                occurred_at = %diagnostic.occurred_at.to_rfc3339(),
                "{}",
                diagnostic.detail
            );
        } else {
            // nowhere left to report a failed write
            let _ = write_diagnostic(fallback, diagnostic);
        }
    }
}

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.emit_or_fallback(diagnostic, &mut io::stderr().lock());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        let _ = write_diagnostic(&mut io::stderr().lock(), diagnostic);
    }
}

/// Sends diagnostics to any writer, e.g. a log file the host owns.
#[derive(Debug, Default)]
pub struct WriterSink<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl WriterSink<Vec<u8>> {
    pub fn output(&self) -> String {
        self.writer
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn emit(&self, diagnostic: &Diagnostic) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = write_diagnostic(&mut *writer, diagnostic);
        }
    }
}

/// Keeps every diagnostic in memory. Share it through an `Arc` to read them back.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(diagnostic.clone());
        }
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HookKind;

    #[test]
    fn test_memory_sink_through_arc() {
        let sink = Arc::new(MemorySink::new());
        let shared: Box<dyn DiagnosticSink> = Box::new(Arc::clone(&sink));

        let err = anyhow::anyhow!("boom");
        shared.emit(&Diagnostic::from_error(HookKind::Model, &err));

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.entries()[0].summary, "boom");
        assert_eq!(sink.entries()[0].hook, HookKind::Model);
    }

    #[test]
    fn test_tracing_sink_falls_back_without_subscriber() {
        let err = anyhow::anyhow!("index.lock exists").context("committing scaffold");
        let diag = Diagnostic::from_error(HookKind::Project, &err);

        let mut out = Vec::new();
        TracingSink.emit_or_fallback(&diag, &mut out);
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("[init_project] "));
        assert!(text.contains("committing scaffold"));
        assert!(text.contains("index.lock exists"));
    }

    #[test]
    fn test_write_diagnostic_format() {
        let err = anyhow::anyhow!("bad field");
        let diag = Diagnostic::from_error(HookKind::Model, &err);

        let mut out = Vec::new();
        write_diagnostic(&mut out, &diag).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            format!("[init_model] {}", diag.occurred_at.to_rfc3339())
        );
        assert_eq!(lines.next().unwrap(), "bad field");
    }

    #[test]
    fn test_sink_kind_from_toml_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            sink: SinkKind,
        }
        let parsed: Wrapper = toml::from_str(r#"sink = "stderr""#).unwrap();
        assert_eq!(parsed.sink, SinkKind::Stderr);
        assert_eq!(SinkKind::default(), SinkKind::Tracing);
    }
}
