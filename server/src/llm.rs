use serde::{Deserialize, Serialize};

use crate::server_config::LlmConfig;
use crate::warn_log;
use tictactoe_engine::{Board, Mark, parse_suggested_move};

/// Remote move proposer backed by an OpenRouter-compatible chat-completions
/// endpoint. Every outcome short of a parseable digit is a None; the caller
/// owns the legality check and the fallback.
pub struct LlmClient {
    http: reqwest::Client,
    config: LlmConfig,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl LlmClient {
    pub fn new(http: reqwest::Client, config: LlmConfig) -> Self {
        Self { http, config }
    }

    /// Asks the model for a single cell index. Network errors, missing keys,
    /// and unparseable replies all come back as None.
    pub async fn suggest_move(&self, board: &Board, me: Mark, opp: Mark) -> Option<usize> {
        let Ok(api_key) = std::env::var(&self.config.api_key_env) else {
            warn_log!("LLM backend selected but {} is not set", self.config.api_key_env);
            return None;
        };

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a concise Tic Tac Toe assistant. Respond with a single integer."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(board, me, opp),
                },
            ],
            temperature: self.config.temperature,
        };

        let url = format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'));
        let response = match self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn_log!("LLM request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn_log!("LLM endpoint returned {}", response.status());
            return None;
        }

        let body: ChatResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn_log!("LLM response was not valid JSON: {}", e);
                return None;
            }
        };

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)?;
        parse_suggested_move(&text)
    }
}

fn build_prompt(board: &Board, me: Mark, opp: Mark) -> String {
    format!(
        "You are the AI for standard Tic Tac Toe.\n\n\
         Rules: The board is 3x3. Players alternate placing their mark into ONE empty cell \
         per turn. The winner is three in a row (row/column/diagonal).\n\n\
         Board encoding: indices 0..8 left-to-right, top-to-bottom. Empty cells are '.'.\n\n\
         Current board:\n{}\n\n\
         You play as '{}'. Opponent is '{}'.\n\
         Return ONLY a single integer 0-8 for your chosen empty cell. No explanation.",
        board.render(),
        me.as_char(),
        opp.as_char(),
    )
}
