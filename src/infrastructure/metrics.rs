//! Prometheus metrics for the service.
//!
//! A [`Metrics`] value owns its own [`Registry`], so every application
//! instance (and every test) exports an independent set of series.

use std::time::Duration;

use prometheus::{
    Encoder, Gauge, HistogramOpts, HistogramVec, IntCounter, IntGauge, Registry, TextEncoder,
};

/// Request latency buckets in seconds.
const DURATION_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0];

/// Application metrics container.
pub struct Metrics {
    registry: Registry,

    /// HTTP request duration by method, matched route and status code.
    pub http_request_duration: HistogramVec,

    /// Short links created.
    pub urls_created: IntCounter,

    /// Redirects served.
    pub url_redirects: IntCounter,

    /// Seconds since the process started, refreshed on scrape.
    pub uptime_seconds: Gauge,

    /// Links currently held in the registry, refreshed on scrape.
    pub links_stored: IntGauge,
}

impl Metrics {
    /// Creates and registers all metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric definition is invalid or registered twice.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of HTTP requests in seconds",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route", "status_code"],
        )?;

        let urls_created = IntCounter::new("urls_created_total", "Total number of URLs shortened")?;

        let url_redirects =
            IntCounter::new("url_redirects_total", "Total number of redirects performed")?;

        let uptime_seconds = Gauge::new("tinylink_uptime_seconds", "Server uptime in seconds")?;

        let links_stored =
            IntGauge::new("tinylink_links_stored", "Number of short links in the registry")?;

        registry.register(Box::new(http_request_duration.clone()))?;
        registry.register(Box::new(urls_created.clone()))?;
        registry.register(Box::new(url_redirects.clone()))?;
        registry.register(Box::new(uptime_seconds.clone()))?;
        registry.register(Box::new(links_stored.clone()))?;

        // CPU, memory and file descriptor usage of this process.
        #[cfg(target_os = "linux")]
        registry.register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

        Ok(Self {
            registry,
            http_request_duration,
            urls_created,
            url_redirects,
            uptime_seconds,
            links_stored,
        })
    }

    /// Records one finished HTTP request.
    pub fn observe_request(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.http_request_duration
            .with_label_values(&[method, route, status.as_str()])
            .observe(elapsed.as_secs_f64());
    }

    /// Updates the gauges that are sampled rather than counted.
    pub fn refresh(&self, uptime: Duration, links: usize) {
        self.uptime_seconds.set(uptime.as_secs_f64());
        self.links_stored
            .set(i64::try_from(links).unwrap_or(i64::MAX));
    }

    /// Content type of [`Metrics::render`] output.
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Encodes all metrics in the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_exported() {
        let metrics = Metrics::new().unwrap();
        metrics.urls_created.inc();
        metrics.url_redirects.inc_by(3);

        let output = metrics.render().unwrap();

        assert!(output.contains("urls_created_total 1"));
        assert!(output.contains("url_redirects_total 3"));
    }

    #[test]
    fn test_observe_request_adds_labelled_series() {
        let metrics = Metrics::new().unwrap();
        metrics.observe_request("GET", "/health", 200, Duration::from_millis(3));

        let output = metrics.render().unwrap();

        assert!(output.contains("http_request_duration_seconds"));
        assert!(output.contains(r#"route="/health""#));
        assert!(output.contains(r#"status_code="200""#));
    }

    #[test]
    fn test_refresh_sets_gauges() {
        let metrics = Metrics::new().unwrap();
        metrics.refresh(Duration::from_secs(42), 7);

        let output = metrics.render().unwrap();

        assert!(output.contains("tinylink_uptime_seconds 42"));
        assert!(output.contains("tinylink_links_stored 7"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_process_metrics_are_exported() {
        let metrics = Metrics::new().unwrap();

        let output = metrics.render().unwrap();

        assert!(output.contains("process_cpu_seconds_total"));
        assert!(output.contains("process_resident_memory_bytes"));
    }

    #[test]
    fn test_instances_are_independent() {
        let first = Metrics::new().unwrap();
        let second = Metrics::new().unwrap();
        first.urls_created.inc();

        assert!(second.render().unwrap().contains("urls_created_total 0"));
    }
}
