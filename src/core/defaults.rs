use crate::models::{
    EducationLevel, Gender, Lifestyle, LoveLanguage, Personality, PoliticalView, PreferenceLevel,
    RelationshipGoal, Religion, SpokenLanguage, UserPreference,
};

/// Preference set returned when no language-model client is configured.
///
/// Distinct from [`fallback_preferences`]: the unconfigured profile leans
/// optimistic (open to long distance, wider income band) while the failure
/// profile is the more conservative one the analysis pipeline falls back to.
pub fn unconfigured_preferences(user_id: &str) -> UserPreference {
    UserPreference {
        user_id: user_id.to_string(),
        interested_in: vec![Gender::Female],
        age_range_min: 22,
        age_range_max: 30,
        personality_types: Some(vec![Personality::Introvert]),
        drinking: Some(PreferenceLevel::No),
        smoking: Some(PreferenceLevel::No),
        relationship_goals: Some(vec![RelationshipGoal::LongTerm]),
        religion_preference: Some(vec![Religion::Other]),
        education_preference: Some(vec![EducationLevel::Bachelors]),
        lifestyle_preferences: Some(vec![Lifestyle::TechSavvy]),
        has_children: Some(PreferenceLevel::No),
        wants_children: Some(PreferenceLevel::Maybe),
        open_to_long_distance: Some(true),
        political_view: Some(PoliticalView::Moderate),
        love_language: Some(vec![LoveLanguage::QualityTime]),
        preferred_languages: Some(vec![SpokenLanguage::French]),
        income_min: Some(30_000),
        income_max: Some(100_000),
    }
}

/// Preference set used when the model call fails, its reply cannot be parsed,
/// or individual fields are missing from an otherwise valid reply.
///
/// One constructor, three call sites: call failure, parse failure, and the
/// field-by-field merge all draw from this same literal set.
pub fn fallback_preferences(user_id: &str) -> UserPreference {
    UserPreference {
        user_id: user_id.to_string(),
        interested_in: vec![Gender::Female],
        age_range_min: 22,
        age_range_max: 30,
        personality_types: Some(vec![Personality::Introvert]),
        drinking: Some(PreferenceLevel::Maybe),
        smoking: Some(PreferenceLevel::No),
        relationship_goals: Some(vec![RelationshipGoal::LongTerm]),
        religion_preference: Some(vec![Religion::Other]),
        education_preference: Some(vec![EducationLevel::Bachelors]),
        lifestyle_preferences: Some(vec![Lifestyle::Travel]),
        has_children: Some(PreferenceLevel::No),
        wants_children: Some(PreferenceLevel::Maybe),
        open_to_long_distance: Some(false),
        political_view: Some(PoliticalView::Moderate),
        love_language: Some(vec![LoveLanguage::QualityTime]),
        preferred_languages: Some(vec![SpokenLanguage::French]),
        income_min: Some(25_000),
        income_max: Some(60_000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sets_differ_where_expected() {
        let a = unconfigured_preferences("u1");
        let b = fallback_preferences("u1");

        assert_ne!(a, b);
        assert_eq!(a.drinking, Some(PreferenceLevel::No));
        assert_eq!(b.drinking, Some(PreferenceLevel::Maybe));
        assert_eq!(a.lifestyle_preferences, Some(vec![Lifestyle::TechSavvy]));
        assert_eq!(b.lifestyle_preferences, Some(vec![Lifestyle::Travel]));
        assert_eq!(a.open_to_long_distance, Some(true));
        assert_eq!(b.open_to_long_distance, Some(false));
        assert_eq!((a.income_min, a.income_max), (Some(30_000), Some(100_000)));
        assert_eq!((b.income_min, b.income_max), (Some(25_000), Some(60_000)));
    }

    #[test]
    fn test_default_sets_agree_elsewhere() {
        let a = unconfigured_preferences("u1");
        let b = fallback_preferences("u1");

        assert_eq!(a.user_id, b.user_id);
        assert_eq!(a.interested_in, b.interested_in);
        assert_eq!((a.age_range_min, a.age_range_max), (22, 30));
        assert_eq!((b.age_range_min, b.age_range_max), (22, 30));
        assert_eq!(a.personality_types, b.personality_types);
        assert_eq!(a.smoking, b.smoking);
    }
}
