/// Receives delivered passage text, e.g. a text field or document buffer.
///
/// Called from the presentation layer's own thread, never from a lookup task.
pub trait OutputSink {
    fn insert(&mut self, text: &str);
}
