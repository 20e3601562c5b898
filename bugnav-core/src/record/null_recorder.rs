use super::{Record, Recorder};

/// Drops every record, for runs where only the returned values matter.
#[derive(Default)]
pub struct NullRecorder;

impl NullRecorder {
    /// Constructs the recorder.
    pub fn new() -> Self {
        Self
    }
}

impl Recorder for NullRecorder {
    fn write(&mut self, _record: Record) {}

    fn store(&mut self, _record: Record) {}

    fn flush(&mut self, _step: i64) {}
}
