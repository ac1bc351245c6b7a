//! Sentinel Simulation
//!
//! Deterministic demo agents for exercising the sentinel auditor: a
//! marketing bot that overspends on expensive models, a data-sync bot that
//! oversteps its access scope, and a monitor bot that loops and floods the
//! API. The orchestrator runs the fleet and gathers one combined transcript.
//!
//! This crate only *produces* activity-log text; classification lives in
//! `sentinel-core`.

pub mod agents;
pub mod orchestrator;
pub mod sample;

pub use agents::{ActivityLog, DataSyncAgent, MarketingAgent, MonitorAgent, SimulatedAgent};
pub use orchestrator::{AgentTranscript, Orchestrator, SimulationRun};
pub use sample::{sample_activity_logs, SAMPLE_DESCRIPTION};
