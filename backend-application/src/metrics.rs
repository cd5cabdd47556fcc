use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    reports_submitted: AtomicU64,
    reports_approved: AtomicU64,
    reports_rejected: AtomicU64,
    events_added: AtomicU64,
    write_failures: AtomicU64,
}

impl Metrics {
    pub fn record_submission(&self) {
        self.reports_submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_approval(&self) {
        self.reports_approved.fetch_add(1, Ordering::Relaxed);
        self.events_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.reports_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_added(&self) {
        self.events_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let submitted = self.reports_submitted.load(Ordering::Relaxed);
        let approved = self.reports_approved.load(Ordering::Relaxed);
        let rejected = self.reports_rejected.load(Ordering::Relaxed);
        let events = self.events_added.load(Ordering::Relaxed);
        let failures = self.write_failures.load(Ordering::Relaxed);

        format!(
            "# TYPE siglon_reports_submitted_total counter\n\
siglon_reports_submitted_total {}\n\
# TYPE siglon_reports_approved_total counter\n\
siglon_reports_approved_total {}\n\
# TYPE siglon_reports_rejected_total counter\n\
siglon_reports_rejected_total {}\n\
# TYPE siglon_events_added_total counter\n\
siglon_events_added_total {}\n\
# TYPE siglon_store_write_failures_total counter\n\
siglon_store_write_failures_total {}\n",
            submitted, approved, rejected, events, failures
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_counts_as_added_event() {
        let metrics = Metrics::default();
        metrics.record_approval();
        metrics.record_event_added();
        metrics.record_write_failure();
        let text = metrics.render_prometheus();
        assert!(text.contains("siglon_reports_approved_total 1\n"));
        assert!(text.contains("siglon_events_added_total 2\n"));
        assert!(text.contains("siglon_store_write_failures_total 1\n"));
        assert_eq!(metrics.write_failures(), 1);
    }
}
