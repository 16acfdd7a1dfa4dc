//! Gemini `generateContent` wire types
//!
//! Only the members the pipeline reads are modeled; everything else in the
//! reply (safety ratings, usage metadata) is ignored.

use roadmap_core::GenerationError;
use serde::{Deserialize, Serialize};

/// Request body: one user turn holding the prompt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation turns
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request for `prompt`
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    /// "user" or "model"
    pub role: String,
    /// Text parts
    pub parts: Vec<Part>,
}

/// One text part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    /// Part text
    pub text: String,
}

/// Reply body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Map a non-success HTTP reply to a generation error
#[must_use]
pub fn status_error(status: u16, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        401 | 403 => GenerationError::Auth(message),
        429 => GenerationError::RateLimit(message),
        _ => GenerationError::Api { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
        assert_eq!(
            body,
            json!({"contents": [{"role": "user", "parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn response_concatenates_parts() {
        let reply: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "```json\n"}, {"text": "{}\n```"}]},
                 "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12}
        }))
        .unwrap();
        assert_eq!(reply.text().as_deref(), Some("```json\n{}\n```"));
    }

    #[test]
    fn response_without_text() {
        let blocked: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        assert_eq!(blocked.text(), None);

        let empty: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}}]
        }))
        .unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn status_mapping() {
        let body = r#"{"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            status_error(429, body),
            GenerationError::RateLimit("Resource has been exhausted".to_string())
        );
        assert!(matches!(status_error(403, "{}"), GenerationError::Auth(_)));
        assert_eq!(
            status_error(500, "upstream exploded\n"),
            GenerationError::Api {
                status: 500,
                message: "upstream exploded".to_string()
            }
        );
    }
}
