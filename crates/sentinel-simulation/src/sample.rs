//! Canonical sample transcript
//!
//! A fixed multi-agent activity log that exercises every violation kind,
//! served by the API's sample-data endpoint and the CLI `sample` command.

/// Description shown alongside the sample logs
pub const SAMPLE_DESCRIPTION: &str = "Sample agent activity logs with various violations";

/// Sample activity logs covering cost, security, rate-limit, and anomaly
/// signatures, plus one healthy agent
pub fn sample_activity_logs() -> &'static str {
    "Agent-A: Called gpt-4 85 times in 10 min, cost $127.50\n\
     Agent-A: Accessed database write operation on production DB\n\
     Agent-B: Rate limit exceeded - 429 response from API\n\
     Agent-B: Same tool invoked 45 times with identical parameters\n\
     Agent-C: Attempted unauthorized access to restricted S3 bucket\n\
     Agent-C: API_KEY exposed in logs - credential leak detected\n\
     Agent-D: Called gpt-4o 220 times in 5 min, cost $89.00\n\
     Agent-D: 23 errors encountered during execution\n\
     Agent-E: Normal operation - 12 successful tool invocations, cost $3.50"
}
