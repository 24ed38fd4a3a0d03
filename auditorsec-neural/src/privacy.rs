use regex::Regex;
use std::sync::OnceLock;

/// Strips secrets and contact details out of free-form queries before they
/// leave the machine.
pub struct PrivacyGuard;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static IP_REGEX: OnceLock<Regex> = OnceLock::new();
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl PrivacyGuard {
    /// Scrub the input string, returning the redacted copy.
    pub fn scrub(input: &str) -> String {
        let email_re = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("Invalid Email Regex")
        });
        let scrubbed = email_re.replace_all(input, "[REDACTED_EMAIL]");

        let ip_re = IP_REGEX
            .get_or_init(|| Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").expect("Invalid IP Regex"));
        let scrubbed = ip_re.replace_all(&scrubbed, "[REDACTED_IP]");

        // Google keys (AIza...) and OpenAI-style secret keys (sk-...).
        let key_re = KEY_REGEX.get_or_init(|| {
            Regex::new(r"\b(AIza[0-9A-Za-z_-]{30,}|sk-[A-Za-z0-9]{20,})\b")
                .expect("Invalid Key Regex")
        });
        let scrubbed = key_re.replace_all(&scrubbed, "[REDACTED_KEY]");

        let out = scrubbed.into_owned();
        if out != input {
            tracing::warn!("query contained sensitive data; scrubbed before sending");
        }
        out
    }
}
