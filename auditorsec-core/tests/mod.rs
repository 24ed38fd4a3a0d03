use auditorsec_core::feed::{integrations, recent_events, EventKind, RevenueSeries};
use auditorsec_core::prompt::{build_prompt, PromptTemplate};
use auditorsec_core::tracks::{
    Alternative, MilestoneStatus, RiskLevel, TrackCatalog, TrackData, TrackError, TrackType,
    DEFAULT_TRACK_ID,
};

// ============================================================================
// TrackType Tests
// ============================================================================

#[test]
fn test_track_type_labels() {
    assert_eq!(TrackType::Legal.label(), "Legal AI Shield");
    assert_eq!(TrackType::Security.label(), "Audityzer.Web3");
    assert_eq!(TrackType::Iot.label(), "Bakhmach Hub");
    assert_eq!(TrackType::Finance.label(), "Financial Ecosystem");
    assert_eq!(TrackType::Crypto.label(), "Post-Quantum R&D");
}

#[test]
fn test_track_type_display_matches_label() {
    assert_eq!(TrackType::Crypto.to_string(), TrackType::Crypto.label());
}

// ============================================================================
// TrackCatalog Tests
// ============================================================================

#[test]
fn test_seeded_catalog() {
    let catalog = TrackCatalog::seeded();
    assert_eq!(catalog.len(), 3);
    let ids: Vec<&str> = catalog.tracks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["track-1", "track-2", "track-5"]);
}

#[test]
fn test_default_track_is_security() {
    let catalog = TrackCatalog::default();
    let track = catalog.default_track().unwrap();
    assert_eq!(track.id, DEFAULT_TRACK_ID);
    assert_eq!(track.track_type, TrackType::Security);
    assert_eq!(track.progress, 75);
}

#[test]
fn test_default_track_falls_back_to_first() {
    let mut tracks = TrackCatalog::seeded().tracks().to_vec();
    tracks.retain(|t| t.id != DEFAULT_TRACK_ID);
    let catalog = TrackCatalog::new(tracks);
    assert_eq!(catalog.default_track().unwrap().id, "track-1");
}

#[test]
fn test_unknown_track() {
    let catalog = TrackCatalog::seeded();
    assert_eq!(
        catalog.get("track-9").unwrap_err(),
        TrackError::UnknownTrack("track-9".to_string())
    );
}

#[test]
fn test_seeded_tracks_validate() {
    for track in TrackCatalog::seeded().tracks() {
        assert!(track.validate().is_ok(), "{} failed validation", track.id);
    }
}

#[test]
fn test_catalog_serialization() {
    let catalog = TrackCatalog::seeded();
    let json = serde_json::to_string(catalog.tracks()).unwrap();
    assert!(json.contains(r#""status":"in-progress""#));
    assert!(json.contains(r#""risk_level":"medium""#));
    let back: Vec<TrackData> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, catalog.tracks());
}

// ============================================================================
// TrackData Tests
// ============================================================================

#[test]
fn test_risk_severity_steps_down() {
    assert_eq!(TrackData::risk_severity(0), 80);
    assert_eq!(TrackData::risk_severity(1), 60);
    assert_eq!(TrackData::risk_severity(3), 20);
    assert_eq!(TrackData::risk_severity(4), 0);
    assert_eq!(TrackData::risk_severity(10), 0);
}

#[test]
fn test_completed_milestones() {
    let catalog = TrackCatalog::seeded();
    assert_eq!(catalog.get("track-1").unwrap().completed_milestones(), 0);
    assert_eq!(catalog.get("track-5").unwrap().completed_milestones(), 1);
}

#[test]
fn test_strongest_alternative() {
    let catalog = TrackCatalog::seeded();
    let track = catalog.get("track-2").unwrap();
    assert_eq!(track.strongest_alternative().unwrap().name, "AI-Agent Fuzzing");
}

#[test]
fn test_strongest_alternative_prefers_lower_risk_on_tie() {
    let mut track = TrackCatalog::seeded().get("track-1").unwrap().clone();
    track.alternatives = vec![
        Alternative::new("Risky", &[], &[], RiskLevel::High, 7).unwrap(),
        Alternative::new("Safe", &[], &[], RiskLevel::Low, 7).unwrap(),
    ];
    assert_eq!(track.strongest_alternative().unwrap().name, "Safe");
}

#[test]
fn test_alternative_impact_range() {
    assert_eq!(
        Alternative::new("x", &[], &[], RiskLevel::Low, 0).unwrap_err(),
        TrackError::ImpactOutOfRange(0)
    );
    assert_eq!(
        Alternative::new("x", &[], &[], RiskLevel::Low, 11).unwrap_err(),
        TrackError::ImpactOutOfRange(11)
    );
    assert!(Alternative::new("x", &["a"], &["b"], RiskLevel::Low, 10).is_ok());
}

#[test]
fn test_validate_rejects_progress_over_100() {
    let mut track = TrackCatalog::seeded().get("track-2").unwrap().clone();
    track.progress = 120;
    assert_eq!(track.validate(), Err(TrackError::ProgressOutOfRange(120)));
}

#[test]
fn test_catalog_drops_invalid_tracks() {
    let seeded = TrackCatalog::seeded();
    let mut broken = seeded.get("track-1").unwrap().clone();
    broken.id = "track-9".into();
    broken.progress = 140;
    let mut bad_impact = seeded.get("track-5").unwrap().clone();
    bad_impact.id = "track-10".into();
    bad_impact.alternatives[0].impact = 0;

    let mut tracks = seeded.tracks().to_vec();
    tracks.push(broken);
    tracks.push(bad_impact);

    let catalog = TrackCatalog::new(tracks);
    assert_eq!(catalog.len(), 3);
    assert!(catalog.get("track-9").is_err());
    assert!(catalog.get("track-10").is_err());
}

#[test]
fn test_milestone_status_label() {
    assert_eq!(MilestoneStatus::InProgress.label(), "in-progress");
    assert_eq!(MilestoneStatus::Delayed.label(), "delayed");
}

// ============================================================================
// Prompt Tests
// ============================================================================

fn security_track() -> TrackData {
    TrackCatalog::seeded().get("track-2").unwrap().clone()
}

#[test]
fn test_prompt_contains_track_context() {
    let prompt = build_prompt(&security_track(), &PromptTemplate::StrategicAlternatives);
    assert!(prompt.contains("Lead Architect for AuditorSEC"));
    assert!(prompt.contains("Current focus: Audityzer.Web3."));
    assert!(prompt.contains("Current Progress: 75%."));
    assert!(prompt.contains("Key Milestones: CoopToken.sol Audit, Hybrid PQ Registry."));
    assert!(prompt.contains("Critical Risks: Contract vulnerability coverage, Gas cost for ZK proofs."));
}

#[test]
fn test_prompt_default_task() {
    let prompt = build_prompt(&security_track(), &PromptTemplate::StrategicAlternatives);
    assert!(prompt.contains(
        "Task: Suggest 3 strategic alternatives to accelerate the completion of the Audityzer.Web3 track"
    ));
    assert!(prompt.contains("SOC 2 compliance"));
}

#[test]
fn test_prompt_requirements() {
    let prompt = build_prompt(&security_track(), &PromptTemplate::MitigationPlan);
    assert!(prompt.contains("Requirements:\n- Be technical and realistic.\n"));
    assert!(prompt.contains("- Format with clear headings and bullet points.\n"));
    assert!(prompt.contains("mitigation plan"));
}

#[test]
fn test_prompt_custom_query() {
    let template = PromptTemplate::from_query("  Compare SNOVA with Dilithium costs  ");
    assert_eq!(
        template,
        PromptTemplate::Custom("Compare SNOVA with Dilithium costs".to_string())
    );
    let prompt = build_prompt(&security_track(), &template);
    assert!(prompt.contains("Task: Compare SNOVA with Dilithium costs\n"));
}

#[test]
fn test_blank_query_falls_back_to_default() {
    assert_eq!(
        PromptTemplate::from_query("   "),
        PromptTemplate::StrategicAlternatives
    );
    let prompt = build_prompt(&security_track(), &PromptTemplate::Custom("  ".to_string()));
    assert!(prompt.contains("Suggest 3 strategic alternatives"));
}

// ============================================================================
// Feed Tests
// ============================================================================

#[test]
fn test_recent_events() {
    let events = recent_events();
    assert_eq!(events.len(), 5);
    assert_eq!(events[1].kind, EventKind::Warning);
    assert_eq!(events[0].age, "2m ago");
}

#[test]
fn test_integrations() {
    let names: Vec<String> = integrations().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["PostgreSQL Cloud", "Monobank API", "Polygon Node"]);
}

#[test]
fn test_revenue_series() {
    let series = RevenueSeries::seeded();
    assert_eq!(series.points().len(), 6);
    assert_eq!(series.max_value(), 65_000);
    assert_eq!(series.latest().unwrap().month, "Dec");
    assert_eq!(series.ahead_of_target(), 4);
    assert_eq!(series.revenue()[0], 4_000);
    assert_eq!(series.targets()[1], 8_000);
}

#[test]
fn test_empty_revenue_series() {
    let series = RevenueSeries::new(Vec::new());
    assert_eq!(series.max_value(), 0);
    assert!(series.latest().is_none());
}
