//! Development track model + seeded catalog.
//!
//! A "track" is a named workstream with progress, milestones, strategic
//! alternatives and critical risks. The data is presentation-only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackError {
    #[error("unknown track id: {0}")]
    UnknownTrack(String),

    #[error("impact must be between 1 and 10, got {0}")]
    ImpactOutOfRange(u8),

    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackType {
    Legal,
    Security,
    Iot,
    Finance,
    Crypto,
}

impl TrackType {
    pub fn label(&self) -> &'static str {
        match self {
            TrackType::Legal => "Legal AI Shield",
            TrackType::Security => "Audityzer.Web3",
            TrackType::Iot => "Bakhmach Hub",
            TrackType::Finance => "Financial Ecosystem",
            TrackType::Crypto => "Post-Quantum R&D",
        }
    }
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Completed,
    InProgress,
    Pending,
    Delayed,
}

impl MilestoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::InProgress => "in-progress",
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::Delayed => "delayed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    /// `YYYY-MM`
    pub date: String,
    pub status: MilestoneStatus,
    pub description: String,
}

impl Milestone {
    pub fn new(
        id: &str,
        title: &str,
        date: &str,
        status: MilestoneStatus,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            status,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub risk_level: RiskLevel,
    /// 1..=10
    pub impact: u8,
}

impl Alternative {
    pub fn new(
        name: &str,
        pros: &[&str],
        cons: &[&str],
        risk_level: RiskLevel,
        impact: u8,
    ) -> Result<Self, TrackError> {
        if !(1..=10).contains(&impact) {
            return Err(TrackError::ImpactOutOfRange(impact));
        }
        Ok(Self {
            name: name.to_string(),
            pros: pros.iter().map(|s| s.to_string()).collect(),
            cons: cons.iter().map(|s| s.to_string()).collect(),
            risk_level,
            impact,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackData {
    pub id: String,
    pub track_type: TrackType,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub revenue: String,
    pub active_pilots: u32,
    pub milestones: Vec<Milestone>,
    pub alternatives: Vec<Alternative>,
    pub critical_risks: Vec<String>,
}

impl TrackData {
    /// Display severity (percent) of the `index`-th critical risk.
    /// The list is ordered most severe first: 80, 60, 40, ...
    pub fn risk_severity(index: usize) -> u8 {
        80usize.saturating_sub(index.saturating_mul(20)) as u8
    }

    pub fn milestone_titles(&self) -> Vec<&str> {
        self.milestones.iter().map(|m| m.title.as_str()).collect()
    }

    pub fn completed_milestones(&self) -> usize {
        self.milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Completed)
            .count()
    }

    /// Alternative with the highest impact; ties go to the lower risk.
    pub fn strongest_alternative(&self) -> Option<&Alternative> {
        self.alternatives
            .iter()
            .max_by(|a, b| a.impact.cmp(&b.impact).then(b.risk_level.cmp(&a.risk_level)))
    }

    pub fn validate(&self) -> Result<(), TrackError> {
        if self.progress > 100 {
            return Err(TrackError::ProgressOutOfRange(self.progress));
        }
        for alt in &self.alternatives {
            if !(1..=10).contains(&alt.impact) {
                return Err(TrackError::ImpactOutOfRange(alt.impact));
            }
        }
        Ok(())
    }
}

/// The seeded set of tracks shown in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackCatalog {
    tracks: Vec<TrackData>,
}

pub const DEFAULT_TRACK_ID: &str = "track-2";

impl TrackCatalog {
    /// Build a catalog, dropping any track that fails [`TrackData::validate`].
    pub fn new(tracks: Vec<TrackData>) -> Self {
        let tracks = tracks
            .into_iter()
            .filter(|t| match t.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(track = %t.id, "dropping invalid track: {}", e);
                    false
                }
            })
            .collect();
        Self { tracks }
    }

    pub fn seeded() -> Self {
        match seed_tracks() {
            Ok(tracks) => Self::new(tracks),
            Err(e) => {
                tracing::error!("seed catalog rejected: {}", e);
                Self::new(Vec::new())
            }
        }
    }

    pub fn tracks(&self) -> &[TrackData] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&TrackData, TrackError> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TrackError::UnknownTrack(id.to_string()))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// The track the dashboard opens on; falls back to the first one.
    pub fn default_track(&self) -> Option<&TrackData> {
        self.get(DEFAULT_TRACK_ID).ok().or_else(|| self.tracks.first())
    }
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn risks(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seed_tracks() -> Result<Vec<TrackData>, TrackError> {
    use MilestoneStatus::*;
    use RiskLevel::*;

    Ok(vec![
        TrackData {
            id: "track-1".into(),
            track_type: TrackType::Legal,
            progress: 45,
            revenue: "$10K MRR".into(),
            active_pilots: 12,
            critical_risks: risks(&["Court API downtime", "Regulatory shifts in Ukraine"]),
            milestones: vec![
                Milestone::new(
                    "m1",
                    "Cabinet.court.gov.ua Integration",
                    "2025-10",
                    InProgress,
                    "Real-time data fetching for debt cases.",
                ),
                Milestone::new(
                    "m2",
                    "Self-RAG Agent Prototype",
                    "2025-12",
                    Pending,
                    "Advanced legal documentation synthesis.",
                ),
            ],
            alternatives: vec![
                Alternative::new(
                    "Direct Court Integration",
                    &["High reliability", "Official status"],
                    &["Slow approval process"],
                    Medium,
                    9,
                )?,
                Alternative::new(
                    "Scraper-Based Collection",
                    &["Fast implementation"],
                    &["Legal grey area", "Brittle"],
                    High,
                    6,
                )?,
            ],
        },
        TrackData {
            id: "track-2".into(),
            track_type: TrackType::Security,
            progress: 75,
            revenue: "$50K MRR".into(),
            active_pilots: 5,
            critical_risks: risks(&["Contract vulnerability coverage", "Gas cost for ZK proofs"]),
            milestones: vec![
                Milestone::new(
                    "m3",
                    "CoopToken.sol Audit",
                    "2025-09",
                    Completed,
                    "Mainnet audit for Polygon ecosystem.",
                ),
                Milestone::new(
                    "m4",
                    "Hybrid PQ Registry",
                    "2026-01",
                    InProgress,
                    "On-chain audit trails with Dilithium signatures.",
                ),
            ],
            alternatives: vec![
                Alternative::new(
                    "Symbolic Execution",
                    &["Exhaustive checking"],
                    &["Compute intensive", "State explosion"],
                    Low,
                    8,
                )?,
                Alternative::new(
                    "AI-Agent Fuzzing",
                    &["Extremely fast", "Low false-positives"],
                    &["May miss edge cases"],
                    Medium,
                    10,
                )?,
            ],
        },
        TrackData {
            id: "track-5".into(),
            track_type: TrackType::Crypto,
            progress: 30,
            revenue: "R&D Funding".into(),
            active_pilots: 2,
            critical_risks: risks(&["SNOVA whipping attack vulnerabilities", "Large key sizes"]),
            milestones: vec![
                Milestone::new(
                    "m5",
                    "SNOVA Rust Batcher",
                    "2025-07",
                    Completed,
                    "Implementation of NIST Round 2 multivariate sigs with batching.",
                ),
                Milestone::new(
                    "m6",
                    "Hybrid Proving Node",
                    "2025-11",
                    InProgress,
                    "Rust-based off-chain signature aggregator.",
                ),
            ],
            alternatives: vec![
                Alternative::new(
                    "Hybrid SNOVA Batching",
                    &["Reduced Gas Cost", "High Throughput", "NIST PQ Resistant"],
                    &["Increased Latency", "Trust in Batcher"],
                    Low,
                    10,
                )?,
                Alternative::new(
                    "Pure On-chain SNOVA",
                    &["Decentralized", "Trustless"],
                    &["Extreme Gas Cost", "Size limits"],
                    High,
                    4,
                )?,
            ],
        },
    ])
}
