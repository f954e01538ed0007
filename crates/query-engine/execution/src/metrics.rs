//! Metrics setup and update for the analysis service.

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};

/// The collection of all metrics exposed through the `/metrics` endpoint.
#[derive(Debug, Clone)]
pub struct Metrics {
    analysis_total: IntCounter,
    coauthorship_total: IntCounter,
    error_total: IntCounter,
    query_duration: Histogram,
}

impl Metrics {
    /// Set up counters and histograms used to produce Prometheus metrics.
    pub fn initialize(metrics_registry: &mut Registry) -> Result<Self, prometheus::Error> {
        let analysis_total = add_int_counter_metric(
            metrics_registry,
            "viz_analysis_query_total",
            "Total successful analysis queries.",
        )?;

        let coauthorship_total = add_int_counter_metric(
            metrics_registry,
            "viz_analysis_coauthorship_total",
            "Total successful co-authorship aggregations.",
        )?;

        let error_total = add_int_counter_metric(
            metrics_registry,
            "viz_analysis_error_total",
            "Total requests that failed against the database.",
        )?;

        let query_duration = add_histogram_metric(
            metrics_registry,
            "viz_analysis_query_duration_seconds",
            "Time taken by the database to answer a generated query.",
        )?;

        Ok(Self {
            analysis_total,
            coauthorship_total,
            error_total,
            query_duration,
        })
    }

    pub fn record_successful_analysis(&self) {
        self.analysis_total.inc();
    }

    pub fn record_successful_coauthorship(&self) {
        self.coauthorship_total.inc();
    }

    pub fn record_error(&self) {
        self.error_total.inc();
    }

    pub fn time_query(&self) -> prometheus::HistogramTimer {
        self.query_duration.start_timer()
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounter, prometheus::Error> {
    let int_counter = IntCounter::new(metric_name, metric_description)?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}

/// Create a new histogram metric using the default buckets, and register it with the provided
/// Prometheus Registry.
fn add_histogram_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<Histogram, prometheus::Error> {
    let histogram = Histogram::with_opts(HistogramOpts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(histogram.clone()))?;
    Ok(histogram)
}
