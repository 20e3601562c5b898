use super::Record;

/// A sink of [`Record`]s.
///
/// Records given to [`Recorder::write`] are kept as they are, while those given
/// to [`Recorder::store`] wait until [`Recorder::flush`] reduces them to one.
pub trait Recorder {
    /// Keeps a record.
    fn write(&mut self, record: Record);

    /// Holds a record until the next flush.
    fn store(&mut self, record: Record);

    /// Averages the scalars of the held records and writes the result under
    /// the key `step`, along with `step` itself.
    fn flush(&mut self, step: i64);
}
