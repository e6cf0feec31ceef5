use super::catalog::QuestionCatalog;
use super::provider::CompletionProvider;
use crate::product::{ProductProfile, Question, QuestionType};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

const MAX_AI_QUESTIONS: usize = 5;

/// Produces the follow-up question batch for a product.
///
/// The provider path is strictly best-effort: any failure between the
/// availability probe and the parsed question list drops to the catalog
/// fallback, so `generate` is total and the endpoint never fails because of
/// the external collaborator.
pub struct QuestionGenerator<P> {
    provider: Arc<P>,
    catalog: QuestionCatalog,
}

impl<P> QuestionGenerator<P>
where
    P: CompletionProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            catalog: QuestionCatalog::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate 1..=5 questions for a profile, preferring the AI path.
    pub async fn generate(&self, profile: &ProductProfile) -> Vec<Question> {
        if self.provider.is_available().await {
            match self.ai_questions(profile).await {
                Some(questions) if !questions.is_empty() => return questions,
                _ => debug!("ai question path unusable, serving template fallback"),
            }
        }

        self.catalog.fallback_questions(profile)
    }

    async fn ai_questions(&self, profile: &ProductProfile) -> Option<Vec<Question>> {
        let prompt = build_prompt(profile);

        let response = match self.provider.complete(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "completion provider call failed");
                return None;
            }
        };

        if response.is_empty() {
            warn!("completion provider returned empty text");
            return None;
        }

        let array = extract_json_array(&response)?;
        let entries: Vec<Value> = match serde_json::from_str(array) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(%err, "provider output contained an unparseable array");
                return None;
            }
        };

        let questions = entries
            .into_iter()
            .take(MAX_AI_QUESTIONS)
            .enumerate()
            .map(|(index, entry)| question_from_entry(index, entry))
            .collect();
        Some(questions)
    }
}

/// Prompt sent to the completion provider, embedding the profile fields and
/// demanding a bare JSON array of question objects.
fn build_prompt(profile: &ProductProfile) -> String {
    format!(
        "Based on this product information, generate 3-5 specific, detailed follow-up \
questions that would help assess product transparency, safety, and regulatory compliance:\n\
\n\
Product Name: {name}\n\
Category: {category}\n\
Brand: {brand}\n\
Description: {description}\n\
\n\
Requirements:\n\
1. Questions should be specific to the product category\n\
2. Focus on transparency, safety, and quality aspects\n\
3. Include regulatory and compliance aspects\n\
4. Make questions actionable and measurable\n\
5. Return ONLY a JSON array format\n\
\n\
Example format:\n\
[{{\"id\": \"ingredients_detail\", \"text\": \"Provide detailed ingredient list with \
percentages\", \"type\": \"text\", \"required\": true}}, {{\"id\": \"safety_testing\", \
\"text\": \"Has this product undergone safety testing?\", \"type\": \"boolean\", \
\"required\": true}}]",
        name = profile.name,
        category = profile.category,
        brand = profile.brand,
        description = profile.description,
    )
}

/// Best-effort extraction of the first top-level array literal: the span from
/// the first `[` to the last `]`, greedy across newlines. Returns `None` when
/// no such span exists; the caller decides whether the span parses.
fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Build a question from one parsed provider entry, defaulting every field
/// the model omitted or mangled.
fn question_from_entry(index: usize, entry: Value) -> Question {
    let id = entry
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("ai_question_{index}"));
    let text = entry
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let question_type = entry
        .get("type")
        .cloned()
        .and_then(|value| serde_json::from_value::<QuestionType>(value).ok())
        .unwrap_or_default();
    let options = entry
        .get("options")
        .cloned()
        .and_then(|value| serde_json::from_value::<Vec<String>>(value).ok());
    let required = entry
        .get("required")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    Question {
        id,
        text,
        question_type,
        options,
        required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::provider::{CompletionProvider, ProviderError};
    use async_trait::async_trait;

    /// Scripted provider standing in for the external collaborator.
    struct ScriptedProvider {
        available: bool,
        response: Result<String, ProviderError>,
    }

    impl ScriptedProvider {
        fn unavailable() -> Self {
            Self {
                available: false,
                response: Ok(String::new()),
            }
        }

        fn replies(text: &str) -> Self {
            Self {
                available: true,
                response: Ok(text.to_string()),
            }
        }

        fn fails() -> Self {
            Self {
                available: true,
                response: Err(ProviderError::Transport("connection reset".to_string())),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn is_available(&self) -> bool {
            self.available
        }

        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(err) => Err(ProviderError::Transport(err.to_string())),
            }
        }
    }

    fn profile() -> ProductProfile {
        ProductProfile {
            name: "Lavender Hand Soap".to_string(),
            category: "Personal Care".to_string(),
            brand: "Meadow Lane".to_string(),
            description: "A gentle hand soap with lavender oil.".to_string(),
            ingredients: None,
            certifications: None,
            country_of_origin: None,
            manufacturing_date: None,
            expiry_date: None,
        }
    }

    fn generator(provider: ScriptedProvider) -> QuestionGenerator<ScriptedProvider> {
        QuestionGenerator::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn unavailable_provider_serves_full_fallback_batch() {
        let questions = generator(ScriptedProvider::unavailable())
            .generate(&profile())
            .await;

        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0].id, "template_personalcare0");
        assert_eq!(questions[4].id, "quality_certifications");
        assert_eq!(
            questions[4].options.as_deref().map(<[String]>::len),
            Some(7)
        );

        let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn provider_failure_falls_back_silently() {
        let questions = generator(ScriptedProvider::fails()).generate(&profile()).await;
        assert_eq!(questions.len(), 5);
        assert!(questions[0].id.starts_with("template_"));
    }

    #[tokio::test]
    async fn empty_response_falls_back() {
        let questions = generator(ScriptedProvider::replies("")).generate(&profile()).await;
        assert!(questions[0].id.starts_with("template_"));
    }

    #[tokio::test]
    async fn prose_without_array_falls_back() {
        let questions = generator(ScriptedProvider::replies("I cannot answer that."))
            .generate(&profile())
            .await;
        assert!(questions[0].id.starts_with("template_"));
    }

    #[tokio::test]
    async fn malformed_array_falls_back() {
        let questions = generator(ScriptedProvider::replies("[{\"id\": oops]"))
            .generate(&profile())
            .await;
        assert!(questions[0].id.starts_with("template_"));
    }

    #[tokio::test]
    async fn parsed_entries_get_defaults_and_cap() {
        let reply = r#"Here are the questions you asked for:
[
  {"text": "What preservatives are used?"},
  {"id": "ph_level", "text": "What is the pH?", "type": "number", "required": false},
  {"id": "skin_type", "text": "Which skin types?", "type": "multiselect",
   "options": ["Dry", "Oily"]},
  {"id": "q4", "text": "Four", "type": "mystery"},
  {"id": "q5", "text": "Five"},
  {"id": "q6", "text": "Six"}
]
Let me know if you need more."#;

        let questions = generator(ScriptedProvider::replies(reply))
            .generate(&profile())
            .await;

        assert_eq!(questions.len(), 5, "capped at five entries");
        assert_eq!(questions[0].id, "ai_question_0");
        assert_eq!(questions[0].question_type, QuestionType::Text);
        assert!(questions[0].required);
        assert_eq!(questions[1].question_type, QuestionType::Number);
        assert!(!questions[1].required);
        assert_eq!(
            questions[2].options,
            Some(vec!["Dry".to_string(), "Oily".to_string()])
        );
        assert_eq!(questions[3].question_type, QuestionType::Text);
    }

    #[test]
    fn prompt_embeds_profile_fields() {
        let prompt = build_prompt(&profile());
        assert!(prompt.contains("Product Name: Lavender Hand Soap"));
        assert!(prompt.contains("Category: Personal Care"));
        assert!(prompt.contains("Brand: Meadow Lane"));
        assert!(prompt.contains("Return ONLY a JSON array format"));
    }

    #[test]
    fn extraction_spans_first_open_to_last_close() {
        assert_eq!(extract_json_array("abc [1, 2] def"), Some("[1, 2]"));
        assert_eq!(
            extract_json_array("x [ {\"a\": [1]} ] y [2]"),
            Some("[ {\"a\": [1]} ] y [2]")
        );
        assert_eq!(extract_json_array("no array here"), None);
        assert_eq!(extract_json_array("] mismatched ["), None);
        assert_eq!(extract_json_array("line one\n[\n1,\n2\n]\nline two"), Some("[\n1,\n2\n]"));
    }
}
