//! Pipeline configuration.
//!
//! [`EntropyConfig`] holds the few knobs of [`sleep_temporal_entropy`](crate::sleep_temporal_entropy).
//! By default an unreadable recording aborts the run.

/// Configuration for the file-level entropy pipeline.
///
/// ```
/// use sleep_entropy::EntropyConfig;
///
/// let cfg = EntropyConfig {
///     recording_required: false,   // annotation-only if the EDF is unreadable
///     ..EntropyConfig::default()
/// };
/// assert!(!cfg.recording_required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntropyConfig {
    /// Treat a recording that cannot be read as fatal.
    ///
    /// The recording duration is only reported, never used in the entropy
    /// math. With `false`, a read failure is logged at `warn` level and the
    /// entropy is computed from the annotation alone.
    ///
    /// Default: `true`.
    pub recording_required: bool,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self { recording_required: true }
    }
}
