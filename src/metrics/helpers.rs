//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, HistogramTimer, TextEncoder};

use super::{
    COMPOSITIONS_TOTAL, COMPOSITION_DURATION, COMPOSITION_ERRORS_TOTAL, TEMPLATE_CACHE_HITS,
    TEMPLATE_CACHE_MISSES,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording composition metrics
pub struct CompositionMetrics;

impl CompositionMetrics {
    /// Start timing one composition; the duration is observed when the
    /// timer is dropped
    pub fn start_timer() -> HistogramTimer {
        COMPOSITION_DURATION.start_timer()
    }

    /// Record a composed email
    pub fn record_composed(kind: &str, locale: &str) {
        COMPOSITIONS_TOTAL.with_label_values(&[kind, locale]).inc();
    }

    /// Record a failed composition
    pub fn record_failed(reason: &str) {
        COMPOSITION_ERRORS_TOTAL.with_label_values(&[reason]).inc();
    }
}

/// Helper struct for recording template cache metrics
pub struct TemplateCacheMetrics;

impl TemplateCacheMetrics {
    pub fn record_hit() {
        TEMPLATE_CACHE_HITS.inc();
    }

    pub fn record_miss() {
        TEMPLATE_CACHE_MISSES.inc();
    }
}
