use std::time::Duration;

use rand::Rng;

/// One entry of the reply table: a lowercase keyword fragment and the canned
/// reply it triggers.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReplyRule {
    pub keyword: String,
    pub reply: String,
}

impl ReplyRule {
    pub fn new(keyword: &str, reply: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            reply: reply.to_string(),
        }
    }
}

/// Scripted support assistant. Matching is a case-insensitive substring scan
/// over the rule table in its declared order; the first hit wins, even when a
/// later keyword would also match.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<ReplyRule>,
    fallback: String,
}

impl Responder {
    pub fn new(rules: Vec<ReplyRule>, fallback: &str) -> Self {
        Self {
            rules,
            fallback: fallback.to_string(),
        }
    }

    /// Picks the reply for the given user text. Blank input produces no reply
    /// at all.
    pub fn respond(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let lowered = input.to_lowercase();
        let reply = self
            .rules
            .iter()
            .find(|rule| lowered.contains(&rule.keyword))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(self.fallback.as_str());
        Some(reply)
    }

    /// Same as `respond`, but delivered after a simulated "typing" pause so
    /// the caller applies the reply whenever it resolves. Blank input is
    /// rejected before the pause.
    pub async fn respond_after_delay(&self, input: &str) -> Option<String> {
        let reply = self.respond(input)?.to_string();
        tokio::time::sleep(thinking_delay()).await;
        Some(reply)
    }
}

/// Uniform random pause in [1000, 2000) ms.
pub fn thinking_delay() -> Duration {
    Duration::from_millis(rand::thread_rng().gen_range(1000..2000))
}
