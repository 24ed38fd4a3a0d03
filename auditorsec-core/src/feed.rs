//! Ecosystem side-panel data: recent events, integration map and the
//! revenue series behind the growth chart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcosystemEvent {
    /// Human-readable age, e.g. "15m ago".
    pub age: String,
    pub message: String,
    pub kind: EventKind,
}

impl EcosystemEvent {
    pub fn new(age: &str, message: &str, kind: EventKind) -> Self {
        Self {
            age: age.to_string(),
            message: message.to_string(),
            kind,
        }
    }
}

pub fn recent_events() -> Vec<EcosystemEvent> {
    vec![
        EcosystemEvent::new("2m ago", "SNOVA Sig verification passed", EventKind::Success),
        EcosystemEvent::new("15m ago", "Court API Latency Spike (2.4s)", EventKind::Warning),
        EcosystemEvent::new("1h ago", "New Series A Term Sheet generated", EventKind::Info),
        EcosystemEvent::new("3h ago", "SOC 2 Audit log rotation active", EventKind::Info),
        EcosystemEvent::new(
            "6h ago",
            "Security Vulnerability Scanned (0 critical)",
            EventKind::Success,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub name: String,
    pub status: String,
}

pub fn integrations() -> Vec<Integration> {
    [
        ("PostgreSQL Cloud", "CONNECTED"),
        ("Monobank API", "STABLE"),
        ("Polygon Node", "SYNCING..."),
    ]
    .into_iter()
    .map(|(name, status)| Integration {
        name: name.to_string(),
        status: status.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub revenue: u64,
    pub target: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueSeries {
    points: Vec<RevenuePoint>,
}

impl RevenueSeries {
    pub fn new(points: Vec<RevenuePoint>) -> Self {
        Self { points }
    }

    pub fn seeded() -> Self {
        let raw: [(&'static str, u64, u64); 6] = [
            ("Jul", 4_000, 4_500),
            ("Aug", 7_000, 8_000),
            ("Sep", 12_000, 11_000),
            ("Oct", 25_000, 20_000),
            ("Nov", 45_000, 35_000),
            ("Dec", 65_000, 50_000),
        ];
        Self::new(
            raw.into_iter()
                .map(|(month, revenue, target)| RevenuePoint {
                    month,
                    revenue,
                    target,
                })
                .collect(),
        )
    }

    pub fn points(&self) -> &[RevenuePoint] {
        &self.points
    }

    pub fn revenue(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.revenue).collect()
    }

    pub fn targets(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.target).collect()
    }

    /// Largest value across both series, for a shared chart scale.
    pub fn max_value(&self) -> u64 {
        self.points
            .iter()
            .map(|p| p.revenue.max(p.target))
            .max()
            .unwrap_or(0)
    }

    pub fn latest(&self) -> Option<&RevenuePoint> {
        self.points.last()
    }

    /// Months where actual revenue beat the target.
    pub fn ahead_of_target(&self) -> usize {
        self.points.iter().filter(|p| p.revenue > p.target).count()
    }
}

impl Default for RevenueSeries {
    fn default() -> Self {
        Self::seeded()
    }
}
