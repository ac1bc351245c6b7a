//! Multi-agent orchestration
//!
//! Runs the demo agents in sequence and collects their transcripts into a
//! single run, the way a fleet supervisor would gather activity logs before
//! handing them to the auditor.

use crate::agents::{DataSyncAgent, MarketingAgent, MonitorAgent, SimulatedAgent};

/// Transcript produced by one agent during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTranscript {
    pub agent_id: String,
    pub transcript: String,
}

/// Result of one orchestration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRun {
    pub transcripts: Vec<AgentTranscript>,
}

impl SimulationRun {
    /// All agent transcripts concatenated in run order
    pub fn combined(&self) -> String {
        self.transcripts
            .iter()
            .map(|t| t.transcript.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of agents that produced a transcript
    pub fn agent_count(&self) -> usize {
        self.transcripts.len()
    }
}

/// Runs a fleet of simulated agents and gathers their activity logs
pub struct Orchestrator {
    agents: Vec<Box<dyn SimulatedAgent>>,
}

impl Orchestrator {
    /// Orchestrator over an explicit agent fleet
    pub fn new(agents: Vec<Box<dyn SimulatedAgent>>) -> Self {
        Self { agents }
    }

    /// The standard demo fleet: marketing, data sync, and monitor bots
    pub fn with_default_agents() -> Self {
        Self::new(vec![
            Box::new(MarketingAgent::new()),
            Box::new(DataSyncAgent::new()),
            Box::new(MonitorAgent::new()),
        ])
    }

    /// Number of agents in the fleet
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Play every agent's script and collect the transcripts
    pub fn run(&mut self) -> SimulationRun {
        let mut transcripts = Vec::with_capacity(self.agents.len());

        for agent in &mut self.agents {
            tracing::info!(agent = agent.agent_id(), "running simulated agent");
            agent.run();
            transcripts.push(AgentTranscript {
                agent_id: agent.agent_id().to_string(),
                transcript: agent.transcript(),
            });
        }

        SimulationRun { transcripts }
    }
}
