//! Extraction metrics observer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::ExtractError;

/// Metrics observer for extraction runs.
///
/// Attached per registry with
/// [`ExtractorRegistry::with_metrics`](crate::ExtractorRegistry::with_metrics).
/// Items skipped as unsupported media are not recorded.
pub trait ExtractionMetrics: Send + Sync {
    fn record_extraction(&self, latency: Duration, result: Result<(), ExtractError>);

    /// Called once for every extraction that stopped at the cutoff.
    fn record_truncation(&self, _char_count: usize) {}
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn ExtractionMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start(recorder: Option<&Arc<dyn ExtractionMetrics>>) -> Option<Self> {
        recorder.map(|recorder| Self {
            recorder: Arc::clone(recorder),
            start: Instant::now(),
        })
    }

    pub(crate) fn record(self, result: Result<(), ExtractError>) {
        self.recorder
            .record_extraction(self.start.elapsed(), result);
    }

    pub(crate) fn record_truncation(&self, char_count: usize) {
        self.recorder.record_truncation(char_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        results: Mutex<Vec<Result<(), ExtractError>>>,
    }

    impl ExtractionMetrics for Recording {
        fn record_extraction(&self, _latency: Duration, result: Result<(), ExtractError>) {
            self.results.lock().unwrap().push(result);
        }
    }

    #[test]
    fn no_recorder_means_no_span() {
        assert!(MetricsSpan::start(None).is_none());
    }

    #[test]
    fn span_forwards_result() {
        let recording = Arc::new(Recording::default());
        let recorder: Arc<dyn ExtractionMetrics> = recording.clone();
        let span = MetricsSpan::start(Some(&recorder)).expect("span");
        span.record(Ok(()));
        assert_eq!(*recording.results.lock().unwrap(), vec![Ok(())]);
    }
}
