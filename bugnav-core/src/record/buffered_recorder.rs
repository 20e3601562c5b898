use super::{Record, RecordValue, Recorder};
use std::collections::HashMap;

/// Buffered recorder.
///
/// This is used for recording sequences of observations, actions and
/// step results during evaluation runs. Records given to [`Recorder::store`]
/// are kept aside until [`Recorder::flush`] averages their scalar values
/// into a single record.
#[derive(Default)]
pub struct BufferedRecorder {
    buf: Vec<Record>,
    stored: Vec<Record>,
}

impl BufferedRecorder {
    /// Construct the recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over the written records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.buf.iter()
    }

    /// Returns the number of written records.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no record has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Recorder for BufferedRecorder {
    /// Write a [`Record`] to the buffer.
    fn write(&mut self, record: Record) {
        self.buf.push(record);
    }

    fn store(&mut self, record: Record) {
        self.stored.push(record);
    }

    fn flush(&mut self, step: i64) {
        if self.stored.is_empty() {
            return;
        }

        let mut sums: HashMap<String, (f32, usize)> = HashMap::new();
        for record in self.stored.drain(..) {
            for (k, v) in record.into_iter_in_record() {
                if let RecordValue::Scalar(v) = v {
                    let e = sums.entry(k).or_insert((0.0, 0));
                    e.0 += v;
                    e.1 += 1;
                }
            }
        }

        let mut record = Record::from_scalar("step", step as f32);
        for (k, (sum, n)) in sums {
            record.insert(k, RecordValue::Scalar(sum / n as f32));
        }
        self.buf.push(record);
    }
}
