use crate::core::prompts::{QUOTE_PROMPTS, QUOTE_SYSTEM_PROMPT};
use crate::models::Quote;
use crate::services::llm::{ChatCompletionRequest, ChatMessage, LlmClient, LlmError};
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info};

const QUOTE_TEMPERATURE: f32 = 0.9;
const QUOTE_MAX_TOKENS: u32 = 100;
const QUOTE_PENALTY: f32 = 0.6;
const QUOTE_HISTORY_LIMIT: usize = 30;
const DAILY_QUOTE_HOUR: u32 = 9;

/// Generates French dating-suggestion quotes and keeps the most recent ones
///
/// History is process-local and capped at [`QUOTE_HISTORY_LIMIT`] entries;
/// the oldest entry is dropped when the cap is reached.
pub struct QuoteService {
    llm: Arc<LlmClient>,
    model: String,
    history: Mutex<Vec<Quote>>,
}

impl QuoteService {
    pub fn new(llm: Arc<LlmClient>, model: String) -> Self {
        Self {
            llm,
            model,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Generate one suggestion from a randomly chosen prompt
    pub async fn generate_quote(&self) -> Result<String, LlmError> {
        let prompt = QUOTE_PROMPTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(QUOTE_PROMPTS[0]);

        let completion = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(QUOTE_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            temperature: QUOTE_TEMPERATURE,
            max_tokens: QUOTE_MAX_TOKENS,
            presence_penalty: Some(QUOTE_PENALTY),
            frequency_penalty: Some(QUOTE_PENALTY),
        };

        let quote = self.llm.chat_completion(completion).await?;
        Ok(quote.trim().to_string())
    }

    /// Generate a suggestion and record it in the history
    pub async fn store_daily_quote(&self) -> Result<Quote, LlmError> {
        let text = self.generate_quote().await?;
        let quote = Quote {
            quote: text,
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let mut history = self.history.lock().await;
        history.push(quote.clone());
        if history.len() > QUOTE_HISTORY_LIMIT {
            history.remove(0);
        }

        Ok(quote)
    }

    pub async fn history(&self) -> Vec<Quote> {
        self.history.lock().await.clone()
    }
}

/// Spawn the background task that stores one suggestion every day at 09:00
/// local time
pub fn spawn_daily_quote_task(service: Arc<QuoteService>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(duration_until_next_run()).await;
            match service.store_daily_quote().await {
                Ok(quote) => info!("Stored daily dating suggestion: {}", quote.quote),
                Err(e) => error!("Failed to generate daily suggestion: {}", e),
            }
        }
    })
}

fn duration_until_next_run() -> Duration {
    let now = chrono::Local::now().naive_local();
    let run_time = chrono::NaiveTime::from_hms_opt(DAILY_QUOTE_HOUR, 0, 0)
        .expect("valid schedule time");

    let mut next = now.date().and_time(run_time);
    if next <= now {
        next += chrono::Duration::days(1);
    }

    (next - now).to_std().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_run_is_within_a_day() {
        let delay = duration_until_next_run();
        assert!(delay <= Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn test_quote_prompts_are_all_distinct() {
        for (i, a) in QUOTE_PROMPTS.iter().enumerate() {
            for b in QUOTE_PROMPTS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
