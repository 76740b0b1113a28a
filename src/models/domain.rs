use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gender identities used by the matching platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Three-state preference answer (drinking, smoking, children)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceLevel {
    Yes,
    No,
    Maybe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipGoal {
    Casual,
    LongTerm,
    Marriage,
    Friendship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Religion {
    Islam,
    Hinduism,
    Christianity,
    Buddhism,
    Atheist,
    Agnostic,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    HighSchool,
    Bachelors,
    Masters,
    Doctorate,
    Diploma,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Personality {
    Introvert,
    Extrovert,
    Ambivert,
    Analytical,
    Emotional,
    Adventurous,
    Calm,
    Funny,
    Serious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lifestyle {
    Fitness,
    Travel,
    Nightlife,
    FamilyOriented,
    Vegan,
    PetLover,
    TechSavvy,
    NatureLover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoliticalView {
    Liberal,
    Conservative,
    Moderate,
    Apolitical,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoveLanguage {
    WordsOfAffirmation,
    ActsOfService,
    ReceivingGifts,
    QualityTime,
    PhysicalTouch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpokenLanguage {
    English,
    Bengali,
    Hindi,
    Arabic,
    French,
    Spanish,
    Mandarin,
    Other,
}

/// Extracted matching preferences in the platform's UserPreference format
///
/// Required fields are always present; the optional ones are filled from the
/// fallback defaults before a value ever leaves the extractor, so consumers
/// can rely on a complete object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub user_id: String,
    pub interested_in: Vec<Gender>,
    pub age_range_min: u32,
    pub age_range_max: u32,
    pub personality_types: Option<Vec<Personality>>,
    pub drinking: Option<PreferenceLevel>,
    pub smoking: Option<PreferenceLevel>,
    pub relationship_goals: Option<Vec<RelationshipGoal>>,
    pub religion_preference: Option<Vec<Religion>>,
    pub education_preference: Option<Vec<EducationLevel>>,
    pub lifestyle_preferences: Option<Vec<Lifestyle>>,
    pub has_children: Option<PreferenceLevel>,
    pub wants_children: Option<PreferenceLevel>,
    pub open_to_long_distance: Option<bool>,
    pub political_view: Option<PoliticalView>,
    pub love_language: Option<Vec<LoveLanguage>>,
    pub preferred_languages: Option<Vec<SpokenLanguage>>,
    pub income_min: Option<i64>,
    pub income_max: Option<i64>,
}

/// One user/assistant exchange from the AI conversation store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub user_message: String,
    pub ai_reply: String,
    pub timestamp: String,
}

/// Free-form profile fields forwarded into the analysis prompt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfileInput {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub relationship_status: Option<String>,
    pub profession: Option<String>,
    pub interested_in: Option<String>,
}

/// Everything the extractor needs for one analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub user_id: String,
    pub profile: UserProfileInput,
    pub history: Vec<ConversationRecord>,
}

impl AnalysisRequest {
    /// Build an analysis request from the conversation store's payload
    /// (`{ success, data: { userInfo, conversation: [...] } }`).
    ///
    /// Returns None when the payload does not carry the expected shape.
    pub fn from_payload(user_id: &str, payload: &Value) -> Option<Self> {
        let data = payload.get("data")?;
        let user_info = data.get("userInfo")?;
        let conversation = data.get("conversation")?.as_array()?;

        let field = |key: &str| {
            user_info
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let profile = UserProfileInput {
            name: field("name"),
            age: field("dob"),
            gender: field("gender"),
            relationship_status: field("relationshipStatus"),
            profession: field("profession"),
            interested_in: field("interestedIn"),
        };

        let history = conversation
            .iter()
            .map(|entry| {
                let user_message = entry.get("userMessage")?;
                Some(ConversationRecord {
                    user_message: user_message.get("content")?.as_str()?.to_string(),
                    ai_reply: entry.get("aiReply")?.get("content")?.as_str()?.to_string(),
                    timestamp: user_message.get("createdAt")?.as_str()?.to_string(),
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            user_id: user_id.to_string(),
            profile,
            history,
        })
    }
}

/// A generated dating suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(RelationshipGoal::LongTerm).unwrap(), json!("LONG_TERM"));
        assert_eq!(serde_json::to_value(Lifestyle::TechSavvy).unwrap(), json!("TECH_SAVVY"));
        assert_eq!(
            serde_json::to_value(LoveLanguage::WordsOfAffirmation).unwrap(),
            json!("WORDS_OF_AFFIRMATION")
        );
        assert_eq!(serde_json::to_value(EducationLevel::HighSchool).unwrap(), json!("HIGH_SCHOOL"));
    }

    #[test]
    fn test_preference_field_names_are_camel_case() {
        let preference = UserPreference {
            user_id: "u1".to_string(),
            interested_in: vec![Gender::Female],
            age_range_min: 22,
            age_range_max: 30,
            personality_types: None,
            drinking: None,
            smoking: None,
            relationship_goals: None,
            religion_preference: None,
            education_preference: None,
            lifestyle_preferences: None,
            has_children: None,
            wants_children: None,
            open_to_long_distance: None,
            political_view: None,
            love_language: None,
            preferred_languages: None,
            income_min: None,
            income_max: None,
        };

        let value = serde_json::to_value(&preference).unwrap();
        assert_eq!(value["userId"], json!("u1"));
        assert_eq!(value["interestedIn"], json!(["FEMALE"]));
        assert_eq!(value["ageRangeMin"], json!(22));
        assert!(value.get("ageRangeMax").is_some());
    }

    #[test]
    fn test_analysis_request_from_payload() {
        let payload = json!({
            "success": true,
            "data": {
                "userInfo": {
                    "name": "Claire",
                    "dob": "1995-04-02",
                    "gender": "FEMALE",
                    "relationshipStatus": "single",
                    "profession": "designer",
                    "interestedIn": "MALE"
                },
                "conversation": [
                    {
                        "userMessage": {"content": "Bonjour", "createdAt": "2024-05-01T10:00:00Z"},
                        "aiReply": {"content": "Bonjour, comment allez-vous ?"}
                    }
                ]
            }
        });

        let request = AnalysisRequest::from_payload("u42", &payload).unwrap();
        assert_eq!(request.user_id, "u42");
        assert_eq!(request.profile.name.as_deref(), Some("Claire"));
        assert_eq!(request.history.len(), 1);
        assert_eq!(request.history[0].user_message, "Bonjour");
        assert_eq!(request.history[0].timestamp, "2024-05-01T10:00:00Z");
    }

    #[test]
    fn test_analysis_request_rejects_malformed_payload() {
        let payload = json!({"success": true, "data": {"userInfo": {}}});
        assert!(AnalysisRequest::from_payload("u1", &payload).is_none());
    }
}
