//! In-memory report sink.

use std::collections::BTreeMap;

use crate::domain::foundation::ReportId;
use crate::ports::ReportSink;

/// Buffers the inserted document and placeholder updates in memory.
///
/// Hosts that render into a real container can read the buffered state
/// after a render; tests assert against it directly.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    document: Option<(ReportId, String)>,
    placeholders: BTreeMap<String, String>,
}

impl BufferSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the inserted document, if a render has happened.
    pub fn document(&self) -> Option<&str> {
        self.document.as_ref().map(|(_, doc)| doc.as_str())
    }

    /// Returns the id of the render that produced the document.
    pub fn document_id(&self) -> Option<ReportId> {
        self.document.as_ref().map(|(id, _)| *id)
    }

    /// Returns the value set for a named placeholder.
    pub fn placeholder(&self, name: &str) -> Option<&str> {
        self.placeholders.get(name).map(String::as_str)
    }

    /// Returns the document with every `{{name}}` token replaced by its
    /// placeholder value, the way the view applies post-insert updates.
    pub fn resolved_document(&self) -> Option<String> {
        let mut doc = self.document()?.to_string();
        for (name, value) in &self.placeholders {
            doc = doc.replace(&format!("{{{{{}}}}}", name), value);
        }
        Some(doc)
    }
}

impl ReportSink for BufferSink {
    fn insert_document(&mut self, id: ReportId, document: &str) {
        tracing::debug!(report_id = %id, bytes = document.len(), "document inserted");
        self.document = Some((id, document.to_string()));
    }

    fn set_placeholder(&mut self, name: &str, value: &str) {
        self.placeholders.insert(name.to_string(), value.to_string());
    }
}
