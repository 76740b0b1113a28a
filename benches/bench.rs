// Criterion benchmarks for Amoura AI

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use amoura_ai::core::prompts::render_analysis_prompt;
use amoura_ai::core::{fallback_preferences, trailing_window, MAX_ANALYZED_CONVERSATIONS};
use amoura_ai::models::{ConversationRecord, UserProfileInput};

fn create_history(len: usize) -> Vec<ConversationRecord> {
    (0..len)
        .map(|i| ConversationRecord {
            user_message: format!("je cherche quelqu'un qui aime voyager ({})", i),
            ai_reply: format!("parlez-moi de vos destinations préférées ({})", i),
            timestamp: format!("2024-05-01T10:{:02}:00Z", i % 60),
        })
        .collect()
}

fn create_profile() -> UserProfileInput {
    UserProfileInput {
        name: Some("Claire".to_string()),
        age: Some("1995-04-02".to_string()),
        gender: Some("FEMALE".to_string()),
        relationship_status: Some("single".to_string()),
        profession: Some("designer".to_string()),
        interested_in: Some("MALE".to_string()),
    }
}

fn bench_prompt_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("prompt_rendering");
    let profile = create_profile();

    for size in [10, 50, 100] {
        let history = create_history(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| {
                render_analysis_prompt(
                    black_box("u1"),
                    black_box(&profile),
                    black_box(history),
                )
            })
        });
    }

    group.finish();
}

fn bench_history_windowing(c: &mut Criterion) {
    let history = create_history(150);

    c.bench_function("trailing_window_150", |b| {
        b.iter(|| trailing_window(black_box(&history), MAX_ANALYZED_CONVERSATIONS))
    });
}

fn bench_preference_serialization(c: &mut Criterion) {
    let preference = fallback_preferences("u1");

    c.bench_function("preference_to_json", |b| {
        b.iter(|| serde_json::to_value(black_box(&preference)))
    });
}

criterion_group!(
    benches,
    bench_prompt_rendering,
    bench_history_windowing,
    bench_preference_serialization
);
criterion_main!(benches);
