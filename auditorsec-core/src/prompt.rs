use crate::tracks::TrackData;

/// What the advisor is asked to do for a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptTemplate {
    /// Default task, run whenever a track is opened or re-evaluated.
    StrategicAlternatives,
    /// Mitigation plan for the track's critical risks.
    MitigationPlan,
    /// Free-form question typed by the user.
    Custom(String),
}

impl PromptTemplate {
    /// Wrap a user query; blank queries become the default task.
    pub fn from_query(query: &str) -> Self {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            PromptTemplate::StrategicAlternatives
        } else {
            PromptTemplate::Custom(trimmed.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PromptTemplate::StrategicAlternatives => "strategic alternatives",
            PromptTemplate::MitigationPlan => "mitigation plan",
            PromptTemplate::Custom(_) => "custom query",
        }
    }

    fn task(&self, track: &TrackData) -> String {
        match self {
            PromptTemplate::StrategicAlternatives => format!(
                "Suggest 3 strategic alternatives to accelerate the completion of the {} track \
                 while maintaining SOC 2 compliance and high security standards.",
                track.track_type
            ),
            PromptTemplate::MitigationPlan => format!(
                "Produce a step-by-step mitigation plan for each critical risk of the {} track, \
                 ordered by severity, with an owner role and a verification step for each.",
                track.track_type
            ),
            PromptTemplate::Custom(query) if !query.trim().is_empty() => query.trim().to_string(),
            PromptTemplate::Custom(_) => PromptTemplate::StrategicAlternatives.task(track),
        }
    }
}

const ROLE: &str = "You are the Lead Architect for AuditorSEC, a multi-track cybersecurity \
                    and legal AI ecosystem.";

const REQUIREMENTS: &[&str] = &[
    "Be technical and realistic.",
    "Reference specific technologies like SNOVA, Rust, Solidity, and EU Court APIs where applicable.",
    "Format with clear headings and bullet points.",
];

/// Assemble the full prompt sent to the text-generation service.
pub fn build_prompt(track: &TrackData, template: &PromptTemplate) -> String {
    let mut out = String::new();

    out.push_str(&format!("Context: {}\n", ROLE));
    out.push_str(&format!("Current focus: {}.\n", track.track_type));
    out.push_str(&format!("Current Progress: {}%.\n", track.progress));
    out.push_str(&format!(
        "Key Milestones: {}.\n",
        track.milestone_titles().join(", ")
    ));
    out.push_str(&format!(
        "Critical Risks: {}.\n",
        track.critical_risks.join(", ")
    ));
    out.push('\n');
    out.push_str(&format!("Task: {}\n", template.task(track)));
    out.push('\n');
    out.push_str("Requirements:\n");
    for req in REQUIREMENTS {
        out.push_str(&format!("- {}\n", req));
    }

    out
}
