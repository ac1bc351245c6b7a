//! Integration tests: simulated transcripts through the audit engine

use sentinel_core::{AuditEngine, ViolationKind};
use sentinel_simulation::{sample_activity_logs, Orchestrator};

#[test]
fn test_orchestrated_run_trips_every_violation_kind() {
    let mut orchestrator = Orchestrator::with_default_agents();
    let run = orchestrator.run();

    let engine = AuditEngine::new();
    let report = engine.classify(&run.combined());

    assert!(report.count_kind(ViolationKind::CostSpike) > 0);
    assert!(report.count_kind(ViolationKind::Security) > 0);
    assert!(report.count_kind(ViolationKind::RateLimit) > 0);
    assert!(report.count_kind(ViolationKind::Anomaly) > 0);

    assert_eq!(
        report.agents_audited,
        vec![
            "Agent-DataSync".to_string(),
            "Agent-Marketing".to_string(),
            "Agent-Monitor".to_string()
        ]
    );
    assert_eq!(report.risk_score, 100);
}

#[test]
fn test_sample_logs_audit_is_stable() {
    let engine = AuditEngine::new();
    let report = engine.classify(sample_activity_logs());

    // Every line in the sample carries at least one signature.
    assert_eq!(report.violations.len(), 9);
    assert_eq!(report.agents_audited.len(), 5);
    assert_eq!(report.risk_score, 100);

    // The healthy agent still shows up in the audited set.
    assert!(report
        .agents_audited
        .contains(&"Agent-E".to_string()));
}
