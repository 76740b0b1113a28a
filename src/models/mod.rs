// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnalysisRequest, ConversationRecord, EducationLevel, Gender, Lifestyle, LoveLanguage,
    Personality, PoliticalView, PreferenceLevel, Quote, RelationshipGoal, Religion,
    SpokenLanguage, UserPreference, UserProfileInput,
};
pub use requests::ChatRequest;
pub use responses::{ChatResponse, ConversationResponse, ErrorResponse, HealthResponse};
