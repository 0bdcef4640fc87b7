//! Axum route handlers for the prompt generators.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::export::{self, ExportOutcome};
use crate::generation::prompts::{SYSTEM_PROMPT_FILE_NAME, USER_PROMPT_FILE_NAME};
use crate::generation::scaff::{generate_scaff_prompt, ScaffForm};
use crate::generation::system_prompt::{generate_system_prompt, SystemPromptForm};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

/// POST /api/v1/system-prompt
pub async fn handle_system_prompt(Json(form): Json<SystemPromptForm>) -> Json<PromptResponse> {
    Json(PromptResponse {
        prompt: generate_system_prompt(&form),
    })
}

/// POST /api/v1/system-prompt/copy
pub async fn handle_copy_system_prompt(
    State(state): State<AppState>,
    Json(form): Json<SystemPromptForm>,
) -> Json<ExportOutcome> {
    let prompt = generate_system_prompt(&form);
    Json(export::copy(state.exporter.as_ref(), &prompt).await)
}

/// POST /api/v1/system-prompt/download
pub async fn handle_download_system_prompt(
    State(state): State<AppState>,
    Json(form): Json<SystemPromptForm>,
) -> Json<ExportOutcome> {
    let prompt = generate_system_prompt(&form);
    Json(export::save(state.exporter.as_ref(), SYSTEM_PROMPT_FILE_NAME, &prompt).await)
}

/// POST /api/v1/user-prompt
pub async fn handle_user_prompt(Json(form): Json<ScaffForm>) -> Json<PromptResponse> {
    Json(PromptResponse {
        prompt: generate_scaff_prompt(&form),
    })
}

/// POST /api/v1/user-prompt/copy
pub async fn handle_copy_user_prompt(
    State(state): State<AppState>,
    Json(form): Json<ScaffForm>,
) -> Json<ExportOutcome> {
    let prompt = generate_scaff_prompt(&form);
    Json(export::copy(state.exporter.as_ref(), &prompt).await)
}

/// POST /api/v1/user-prompt/download
pub async fn handle_download_user_prompt(
    State(state): State<AppState>,
    Json(form): Json<ScaffForm>,
) -> Json<ExportOutcome> {
    let prompt = generate_scaff_prompt(&form);
    Json(export::save(state.exporter.as_ref(), USER_PROMPT_FILE_NAME, &prompt).await)
}
