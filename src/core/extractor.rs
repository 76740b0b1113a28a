use crate::core::defaults::{fallback_preferences, unconfigured_preferences};
use crate::core::prompts::{
    render_analysis_prompt, trailing_window, ANALYSIS_SYSTEM_PROMPT, MAX_ANALYZED_CONVERSATIONS,
};
use crate::models::{AnalysisRequest, UserPreference};
use crate::services::llm::{ChatCompletionRequest, ChatMessage, LlmClient};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::warn;

const ANALYSIS_TEMPERATURE: f32 = 0.2;
const ANALYSIS_MAX_TOKENS: u32 = 1500;

/// Derives a structured [`UserPreference`] from a user's conversation history
///
/// Stateless and infallible from the caller's perspective: whatever the
/// model does, `extract` answers with a schema-valid preference object.
/// Failure tiers:
/// - no client configured: the fixed "unconfigured" set
/// - call failed / reply unusable: the fixed fallback set
/// - reply usable but incomplete: fallback values merged in per field
pub struct PreferenceExtractor {
    llm: Option<Arc<LlmClient>>,
    model: String,
}

impl PreferenceExtractor {
    pub fn new(llm: Option<Arc<LlmClient>>, model: String) -> Self {
        Self { llm, model }
    }

    pub async fn extract(&self, request: &AnalysisRequest) -> UserPreference {
        let Some(llm) = &self.llm else {
            return unconfigured_preferences(&request.user_id);
        };

        let window = trailing_window(&request.history, MAX_ANALYZED_CONVERSATIONS);
        let prompt = render_analysis_prompt(&request.user_id, &request.profile, window);

        let completion = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            temperature: ANALYSIS_TEMPERATURE,
            max_tokens: ANALYSIS_MAX_TOKENS,
            presence_penalty: None,
            frequency_penalty: None,
        };

        // Single shot, no retry: any failure degrades to the fallback set
        let reply = match llm.chat_completion(completion).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Preference analysis call failed: {}", e);
                return fallback_preferences(&request.user_id);
            }
        };

        let cleaned = strip_markdown_fences(reply.trim());

        let parsed: Value = match serde_json::from_str(cleaned) {
            Ok(value) => value,
            Err(e) => {
                warn!("Model reply is not valid JSON: {} - reply: {}", e, cleaned);
                return fallback_preferences(&request.user_id);
            }
        };

        merge_with_defaults(parsed, &request.user_id)
    }
}

/// Remove a leading ```json fence and a trailing ``` fence. Each side is
/// tested independently; unpaired fences are stripped too.
fn strip_markdown_fences(reply: &str) -> &str {
    let reply = reply.strip_prefix("```json").unwrap_or(reply);
    reply.strip_suffix("```").unwrap_or(reply)
}

/// Fill missing/null fields from the fallback set, clamp the age range, and
/// deserialize into the typed schema. A reply that still violates the schema
/// after merging (wrong types, unknown enum literals) degrades to the
/// fallback set wholesale.
fn merge_with_defaults(mut parsed: Value, user_id: &str) -> UserPreference {
    let defaults = fallback_preferences(user_id);

    let Value::Object(map) = &mut parsed else {
        warn!("Model reply is not a JSON object");
        return defaults;
    };

    let Ok(Value::Object(default_fields)) = serde_json::to_value(&defaults) else {
        // UserPreference always serializes to an object
        return defaults;
    };

    for (key, default_value) in default_fields {
        let missing = matches!(map.get(&key), None | Some(Value::Null));
        if missing {
            map.insert(key, default_value);
        }
    }

    clamp_age_range(map);

    match serde_json::from_value(parsed) {
        Ok(preference) => preference,
        Err(e) => {
            warn!("Merged preference object failed validation: {}", e);
            defaults
        }
    }
}

/// ageRangeMin is floored at 18; ageRangeMax below the (clamped) minimum is
/// rewritten to minimum + 10. Non-numeric values are left for the typed
/// deserialization to reject.
fn clamp_age_range(map: &mut Map<String, Value>) {
    let Some(mut min) = map.get("ageRangeMin").and_then(Value::as_i64) else {
        return;
    };

    if min < 18 {
        min = 18;
        map.insert("ageRangeMin".to_string(), Value::from(min));
    }

    if let Some(max) = map.get("ageRangeMax").and_then(Value::as_i64) {
        if max < min {
            map.insert("ageRangeMax".to_string(), Value::from(min + 10));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Lifestyle, PreferenceLevel};
    use serde_json::json;

    #[test]
    fn test_strip_fences_paired() {
        let input = "```json\n{\"a\":1}\n```";
        assert_eq!(strip_markdown_fences(input).trim(), "{\"a\":1}");
    }

    #[test]
    fn test_strip_fences_unpaired() {
        assert_eq!(strip_markdown_fences("```json{}"), "{}");
        assert_eq!(strip_markdown_fences("{}```"), "{}");
        assert_eq!(strip_markdown_fences("{}"), "{}");
    }

    #[test]
    fn test_merge_fills_missing_fields_from_fallback() {
        let parsed = json!({
            "userId": "u1",
            "interestedIn": ["MALE"],
            "ageRangeMin": 25,
            "ageRangeMax": 35,
            "drinking": null
        });

        let preference = merge_with_defaults(parsed, "u1");

        assert_eq!(preference.user_id, "u1");
        assert_eq!(preference.interested_in, vec![Gender::Male]);
        assert_eq!(preference.age_range_min, 25);
        // null and absent fields both fall back
        assert_eq!(preference.drinking, Some(PreferenceLevel::Maybe));
        assert_eq!(preference.lifestyle_preferences, Some(vec![Lifestyle::Travel]));
        assert_eq!(preference.income_min, Some(25_000));
    }

    #[test]
    fn test_merge_clamps_age_range() {
        let parsed = json!({"userId": "u1", "ageRangeMin": 15, "ageRangeMax": 10});

        let preference = merge_with_defaults(parsed, "u1");

        assert_eq!(preference.age_range_min, 18);
        assert_eq!(preference.age_range_max, 28);
        assert_eq!(preference.drinking, Some(PreferenceLevel::Maybe));
        assert_eq!(preference.open_to_long_distance, Some(false));
    }

    #[test]
    fn test_merge_max_clamp_uses_post_clamp_minimum() {
        // max 20 is valid against the raw min 15 only after min is raised to 18
        let parsed = json!({"userId": "u1", "ageRangeMin": 15, "ageRangeMax": 16});
        let preference = merge_with_defaults(parsed, "u1");
        assert_eq!(preference.age_range_min, 18);
        assert_eq!(preference.age_range_max, 28);

        let parsed = json!({"userId": "u1", "ageRangeMin": 15, "ageRangeMax": 20});
        let preference = merge_with_defaults(parsed, "u1");
        assert_eq!(preference.age_range_min, 18);
        assert_eq!(preference.age_range_max, 20);
    }

    #[test]
    fn test_merge_rejects_unknown_enum_literal() {
        let parsed = json!({
            "userId": "u1",
            "interestedIn": ["ROBOT"],
            "ageRangeMin": 25,
            "ageRangeMax": 35
        });

        let preference = merge_with_defaults(parsed, "u1");

        // Whole reply degrades to the fallback set
        assert_eq!(preference, fallback_preferences("u1"));
    }

    #[test]
    fn test_merge_rejects_non_object_reply() {
        let preference = merge_with_defaults(json!(["not", "an", "object"]), "u1");
        assert_eq!(preference, fallback_preferences("u1"));
    }

    #[tokio::test]
    async fn test_extract_without_client_returns_unconfigured_set() {
        let extractor = PreferenceExtractor::new(None, "gpt-4-turbo".to_string());
        let request = AnalysisRequest {
            user_id: "u9".to_string(),
            profile: Default::default(),
            history: vec![],
        };

        let preference = extractor.extract(&request).await;
        assert_eq!(preference, unconfigured_preferences("u9"));
        assert_eq!(preference.drinking, Some(PreferenceLevel::No));
        assert_eq!(preference.open_to_long_distance, Some(true));
    }
}
