//! Scripted demo agents
//!
//! Each agent plays a fixed script of activities and records well-formed
//! `Agent-<name>: <message>` lines. Scripts are deterministic so simulation
//! output can be asserted in tests and audited reproducibly.

/// Accumulated activity lines for one agent
#[derive(Debug, Default)]
pub struct ActivityLog {
    lines: Vec<String>,
}

impl ActivityLog {
    fn record(&mut self, agent_id: &str, message: impl AsRef<str>) {
        let line = format!("{}: {}", agent_id, message.as_ref());
        tracing::debug!(agent = agent_id, "{}", message.as_ref());
        self.lines.push(line);
    }

    /// All recorded lines joined into one transcript
    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of recorded lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A demo agent that can play its script and hand back a transcript
pub trait SimulatedAgent {
    /// Agent identifier (`Agent-<name>` form)
    fn agent_id(&self) -> &str;

    /// Play the agent's full activity script
    fn run(&mut self);

    /// Activity transcript recorded so far
    fn transcript(&self) -> String;
}

/// Content generation bot that burns through expensive model calls
pub struct MarketingAgent {
    agent_id: String,
    log: ActivityLog,
}

impl MarketingAgent {
    pub fn new() -> Self {
        Self {
            agent_id: "Agent-Marketing".to_string(),
            log: ActivityLog::default(),
        }
    }

    /// Generate a batch of social posts, one model call each
    pub fn generate_social_posts(&mut self, count: usize) {
        for _ in 0..count {
            self.log.record(
                &self.agent_id,
                "Called gpt-4 for social post generation, cost $1.25",
            );
        }
    }

    /// Brainstorm campaign ideas; the excessive variant is a cost spike
    pub fn generate_campaign_ideas(&mut self, excessive: bool) {
        if excessive {
            self.log.record(
                &self.agent_id,
                "Called gpt-4 85 times in 10 min for campaign ideas, cost $127.50",
            );
        } else {
            self.log
                .record(&self.agent_id, "Generated 3 campaign ideas within budget");
        }
    }
}

impl Default for MarketingAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedAgent for MarketingAgent {
    fn agent_id(&self) -> &str {
        &self.agent_id
    }

    fn run(&mut self) {
        self.generate_social_posts(2);
        self.generate_campaign_ideas(true);
    }

    fn transcript(&self) -> String {
        self.log.transcript()
    }
}

/// Data pipeline bot that oversteps its access scope
pub struct DataSyncAgent {
    agent_id: String,
    log: ActivityLog,
}

impl DataSyncAgent {
    pub fn new() -> Self {
        Self {
            agent_id: "Agent-DataSync".to_string(),
            log: ActivityLog::default(),
        }
    }

    pub fn sync_customer_data(&mut self) {
        self.log
            .record(&self.agent_id, "Normal operation - synced 150 customer records");
    }

    pub fn backup_to_s3(&mut self, unauthorized: bool) {
        if unauthorized {
            self.log.record(
                &self.agent_id,
                "Attempted unauthorized access to restricted S3 bucket",
            );
        } else {
            self.log
                .record(&self.agent_id, "Successfully backed up data to S3");
        }
    }

    pub fn update_production_db(&mut self, with_write: bool) {
        if with_write {
            self.log.record(
                &self.agent_id,
                "Database write operation on production PostgreSQL DB",
            );
        } else {
            self.log
                .record(&self.agent_id, "Read operation on production DB - 200 records");
        }
    }

    pub fn expose_api_key(&mut self) {
        self.log.record(
            &self.agent_id,
            "API_KEY exposed in logs - credential leak detected",
        );
    }
}

impl Default for DataSyncAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedAgent for DataSyncAgent {
    fn agent_id(&self) -> &str {
        &self.agent_id
    }

    fn run(&mut self) {
        self.sync_customer_data();
        self.backup_to_s3(true);
        self.update_production_db(true);
        self.expose_api_key();
    }

    fn transcript(&self) -> String {
        self.log.transcript()
    }
}

/// System monitoring bot that gets stuck in loops and floods the API
pub struct MonitorAgent {
    agent_id: String,
    log: ActivityLog,
}

impl MonitorAgent {
    pub fn new() -> Self {
        Self {
            agent_id: "Agent-Monitor".to_string(),
            log: ActivityLog::default(),
        }
    }

    pub fn check_system_health(&mut self) {
        self.log
            .record(&self.agent_id, "Normal operation - system health check passed");
    }

    pub fn collect_metrics(&mut self, excessive: bool) {
        if excessive {
            self.log.record(
                &self.agent_id,
                "Same tool invoked 96 times with identical parameters",
            );
            self.log
                .record(&self.agent_id, "38 errors encountered during execution");
        } else {
            self.log.record(
                &self.agent_id,
                "Collected CPU, memory, disk metrics - all normal",
            );
        }
    }

    pub fn hit_rate_limit(&mut self) {
        self.log
            .record(&self.agent_id, "850 requests in 8 min - excessive API usage");
        self.log
            .record(&self.agent_id, "Rate limit exceeded - 429 response from API");
    }
}

impl Default for MonitorAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedAgent for MonitorAgent {
    fn agent_id(&self) -> &str {
        &self.agent_id
    }

    fn run(&mut self) {
        self.check_system_health();
        self.collect_metrics(true);
        self.hit_rate_limit();
    }

    fn transcript(&self) -> String {
        self.log.transcript()
    }
}
