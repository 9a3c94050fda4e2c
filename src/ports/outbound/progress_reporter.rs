/// ProgressReporter port: the logging sink handed to every component
/// that reports what it is doing.
///
/// Injected through constructors so no component depends on a global
/// logger; the binary wires in a `tracing`-backed implementation.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports detail that is only interesting when debugging
    fn report_detail(&self, message: &str);

    /// Reports progress through a sequence of items
    ///
    /// # Arguments
    /// * `current` - Index of the item being processed (1-based)
    /// * `total` - Total number of items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
