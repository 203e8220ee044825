//! Prometheus metrics for the mailer.
//!
//! - Composition metrics (composed by kind and locale, failures by reason)
//! - Composition latency
//! - Template cache hits and misses

mod helpers;

pub use helpers::{encode_metrics, CompositionMetrics, TemplateCacheMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "mailer";

lazy_static! {
    // ============================================================================
    // Composition Metrics
    // ============================================================================

    /// Emails composed, by kind and resolved locale
    pub static ref COMPOSITIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_compositions_total", METRIC_PREFIX),
        "Total emails composed",
        &["kind", "locale"]
    ).unwrap();

    /// Failed compositions by reason. Kind is not a label: unknown kinds
    /// come from callers.
    pub static ref COMPOSITION_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_composition_errors_total", METRIC_PREFIX),
        "Total failed compositions",
        &["reason"]
    ).unwrap();

    pub static ref COMPOSITION_DURATION: Histogram = register_histogram!(
        format!("{}_composition_duration_seconds", METRIC_PREFIX),
        "Time to build and wrap one email, in seconds",
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]
    ).unwrap();

    // ============================================================================
    // Template Cache Metrics
    // ============================================================================

    pub static ref TEMPLATE_CACHE_HITS: IntCounter = register_int_counter!(
        format!("{}_template_cache_hits_total", METRIC_PREFIX),
        "Template loads served from the cache"
    ).unwrap();

    pub static ref TEMPLATE_CACHE_MISSES: IntCounter = register_int_counter!(
        format!("{}_template_cache_misses_total", METRIC_PREFIX),
        "Template loads that read from disk"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registered() {
        CompositionMetrics::record_composed("welcome", "en");
        CompositionMetrics::record_failed("invalid_payload");
        TemplateCacheMetrics::record_hit();
        TemplateCacheMetrics::record_miss();

        let output = encode_metrics().unwrap();
        assert!(output.contains("mailer_compositions_total"));
        assert!(output.contains("mailer_composition_errors_total"));
        assert!(output.contains("mailer_template_cache_hits_total"));
    }

    #[test]
    fn test_counters_increase() {
        let before = COMPOSITIONS_TOTAL
            .with_label_values(&["password-reset", "de"])
            .get();
        CompositionMetrics::record_composed("password-reset", "de");
        let after = COMPOSITIONS_TOTAL
            .with_label_values(&["password-reset", "de"])
            .get();
        assert_eq!(after, before + 1);
    }
}
