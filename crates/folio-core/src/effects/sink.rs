use std::sync::{Arc, Mutex};

/// Destination that shows the currently revealed text or number
pub trait DisplaySink: Send {
    fn set_text(&mut self, text: &str);
}

/// Writes into an optional sink; a missing display element is a no-op
pub(crate) fn write_to(sink: &mut Option<Box<dyn DisplaySink>>, text: &str) {
    if let Some(sink) = sink.as_mut() {
        sink.set_text(text);
    }
}

/// Cloneable text cell shared between an effect and the renderer
#[derive(Debug, Clone, Default)]
pub struct SharedText {
    inner: Arc<Mutex<String>>,
}

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let shared = Self::new();
        shared.replace(text);
        shared
    }

    /// Current text
    pub fn get(&self) -> String {
        match self.inner.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn replace(&self, text: &str) {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clear();
        guard.push_str(text);
    }
}

impl DisplaySink for SharedText {
    fn set_text(&mut self, text: &str) {
        self.replace(text);
    }
}

/// Sink that keeps every write, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far
    pub fn writes(&self) -> Vec<String> {
        match self.writes.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Most recent write
    pub fn last(&self) -> Option<String> {
        self.writes().last().cloned()
    }
}

impl DisplaySink for RecordingSink {
    fn set_text(&mut self, text: &str) {
        let mut guard = match self.writes.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_text_clones_see_writes() {
        let text = SharedText::new();
        let mut writer = text.clone();
        writer.set_text("hello");
        assert_eq!(text.get(), "hello");
        writer.set_text("he");
        assert_eq!(text.get(), "he");
    }

    #[test]
    fn test_missing_sink_is_noop() {
        let mut sink: Option<Box<dyn DisplaySink>> = None;
        write_to(&mut sink, "ignored");
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let recorder = RecordingSink::new();
        let mut sink: Option<Box<dyn DisplaySink>> = Some(Box::new(recorder.clone()));
        write_to(&mut sink, "a");
        write_to(&mut sink, "ab");
        assert_eq!(recorder.writes(), vec!["a", "ab"]);
        assert_eq!(recorder.last().as_deref(), Some("ab"));
    }
}
