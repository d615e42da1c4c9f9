//! Per-process request counters with pull-based text exposition.
//!
//! Each service owns one [`RequestMetrics`] inside its application state,
//! initialized once at startup; handlers and middleware see it read-only
//! through the state handle. Rendering follows the Prometheus text format so
//! any pull-based scraper can consume `GET /metrics`.

use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Request counters for one service process.
///
/// Cheaply cloneable via `Arc`; counters are relaxed atomics since exact
/// cross-counter consistency is not needed for scrape output.
#[derive(Clone)]
pub struct RequestMetrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    service: String,
    started: Instant,
    requests_total: AtomicU64,
    responses_2xx: AtomicU64,
    responses_4xx: AtomicU64,
    responses_5xx: AtomicU64,
}

impl RequestMetrics {
    /// Create the metrics handle for a named service.
    #[must_use]
    pub fn new(service: &str) -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                service: service.to_string(),
                started: Instant::now(),
                requests_total: AtomicU64::new(0),
                responses_2xx: AtomicU64::new(0),
                responses_4xx: AtomicU64::new(0),
                responses_5xx: AtomicU64::new(0),
            }),
        }
    }

    /// Record one completed request with its response status.
    pub fn record(&self, status: u16) {
        self.inner.requests_total.fetch_add(1, Ordering::Relaxed);
        let bucket = match status {
            200..=299 => &self.inner.responses_2xx,
            400..=499 => &self.inner.responses_4xx,
            500..=599 => &self.inner.responses_5xx,
            _ => return,
        };
        bucket.fetch_add(1, Ordering::Relaxed);
    }

    /// Total requests observed so far.
    #[must_use]
    pub fn requests_total(&self) -> u64 {
        self.inner.requests_total.load(Ordering::Relaxed)
    }

    /// Render the counters in Prometheus text exposition format.
    #[must_use]
    pub fn render(&self) -> String {
        let service = &self.inner.service;
        let mut out = String::with_capacity(512);

        let _ = writeln!(out, "# TYPE http_requests_total counter");
        let _ = writeln!(
            out,
            "http_requests_total{{service=\"{service}\"}} {}",
            self.inner.requests_total.load(Ordering::Relaxed)
        );

        let _ = writeln!(out, "# TYPE http_responses_total counter");
        for (class, counter) in [
            ("2xx", &self.inner.responses_2xx),
            ("4xx", &self.inner.responses_4xx),
            ("5xx", &self.inner.responses_5xx),
        ] {
            let _ = writeln!(
                out,
                "http_responses_total{{service=\"{service}\",class=\"{class}\"}} {}",
                counter.load(Ordering::Relaxed)
            );
        }

        let _ = writeln!(out, "# TYPE process_uptime_seconds gauge");
        let _ = writeln!(
            out,
            "process_uptime_seconds{{service=\"{service}\"}} {:.3}",
            self.inner.started.elapsed().as_secs_f64()
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_buckets_by_status_class() {
        let metrics = RequestMetrics::new("catalog");
        metrics.record(200);
        metrics.record(201);
        metrics.record(404);
        metrics.record(500);

        assert_eq!(metrics.requests_total(), 4);
        let rendered = metrics.render();
        assert!(rendered.contains("http_requests_total{service=\"catalog\"} 4"));
        assert!(rendered.contains("http_responses_total{service=\"catalog\",class=\"2xx\"} 2"));
        assert!(rendered.contains("http_responses_total{service=\"catalog\",class=\"4xx\"} 1"));
        assert!(rendered.contains("http_responses_total{service=\"catalog\",class=\"5xx\"} 1"));
    }

    #[test]
    fn test_render_includes_uptime_gauge() {
        let metrics = RequestMetrics::new("cart");
        let rendered = metrics.render();
        assert!(rendered.contains("# TYPE process_uptime_seconds gauge"));
        assert!(rendered.contains("process_uptime_seconds{service=\"cart\"}"));
    }

    #[test]
    fn test_redirects_count_toward_total_only() {
        let metrics = RequestMetrics::new("storefront");
        metrics.record(302);
        assert_eq!(metrics.requests_total(), 1);
        let rendered = metrics.render();
        assert!(rendered.contains("http_responses_total{service=\"storefront\",class=\"2xx\"} 0"));
    }
}
