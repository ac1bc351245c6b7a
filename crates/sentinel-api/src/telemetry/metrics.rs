//! Prometheus metrics for audit operations

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

use sentinel_core::AuditReport;

/// Metrics registry for the audit service
pub struct AuditMetrics {
    registry: Registry,
    audits_total: IntCounter,
    violations_total: IntCounterVec,
    risk_score: Histogram,
}

impl AuditMetrics {
    /// Create and register all audit metrics
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let audits_total = IntCounter::new(
            "sentinel_audits_total",
            "Total number of audit requests processed",
        )?;

        let violations_total = IntCounterVec::new(
            Opts::new(
                "sentinel_violations_total",
                "Violations detected, by kind and severity",
            ),
            &["kind", "severity"],
        )?;

        let risk_score = Histogram::with_opts(
            HistogramOpts::new(
                "sentinel_risk_score",
                "Distribution of report risk scores",
            )
            .buckets(vec![0.0, 10.0, 25.0, 50.0, 75.0, 90.0, 100.0]),
        )?;

        registry.register(Box::new(audits_total.clone()))?;
        registry.register(Box::new(violations_total.clone()))?;
        registry.register(Box::new(risk_score.clone()))?;

        Ok(Self {
            registry,
            audits_total,
            violations_total,
            risk_score,
        })
    }

    /// Record one completed audit
    pub fn record_audit(&self, report: &AuditReport) {
        self.audits_total.inc();
        self.risk_score.observe(report.risk_score as f64);

        for violation in &report.violations {
            self.violations_total
                .with_label_values(&[violation.kind.as_str(), violation.severity.as_str()])
                .inc();
        }
    }

    /// Number of audits recorded so far
    pub fn audits_recorded(&self) -> u64 {
        self.audits_total.get()
    }

    /// Render all metrics in Prometheus exposition format
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
