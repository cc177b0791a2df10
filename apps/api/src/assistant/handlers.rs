use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::{fallback, prompts};
use crate::errors::AppError;
use crate::portfolio::models::Project;
use crate::providers::{ChatMessage, CompletionRequest, Role};
use crate::state::AppState;

/// Output caps per endpoint. Project answers get more room for architecture
/// detail than the chat widget's short replies.
const CHAT_MAX_OUTPUT_TOKENS: u32 = 500;
const PROJECT_QA_MAX_OUTPUT_TOKENS: u32 = 800;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

// camelCase wire format: the widget sends `projectId`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQaRequest {
    pub question: Option<String>,
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQaResponse {
    pub answer: String,
    pub project_id: Option<String>,
}

/// POST /api/v1/chat
///
/// Providers are tried in priority order; when all are unconfigured or fail,
/// the keyword responder answers from the last user message.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let messages = req
        .messages
        .ok_or_else(|| AppError::Validation("Messages array is required".to_string()))?;

    let last_user = messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .ok_or_else(|| AppError::Validation("No user message found".to_string()))?
        .clone();

    let request = CompletionRequest {
        system: prompts::chat_system(&state.store)?,
        messages,
        max_output_tokens: CHAT_MAX_OUTPUT_TOKENS,
    };

    if let Some(message) = state.gateway.complete(&request).await {
        return Ok(Json(ChatResponse { message }));
    }

    if !state.config.keyword_fallback {
        return Err(AppError::Unavailable(
            "No completion provider produced an answer".to_string(),
        ));
    }

    Ok(Json(ChatResponse {
        message: fallback::chat_reply(&last_user.content, &state.store),
    }))
}

/// POST /api/v1/project-qa
///
/// A supplied project id is validated against the store before any provider
/// attempt; the echoed id always matches the request.
pub async fn handle_project_qa(
    State(state): State<AppState>,
    Json(req): Json<ProjectQaRequest>,
) -> Result<Json<ProjectQaResponse>, AppError> {
    let question = req
        .question
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Question is required".to_string()))?;

    let scoped: Vec<&Project> = match req.project_id.as_deref() {
        Some(id) => {
            let project = state
                .store
                .project(id)
                .ok_or_else(|| AppError::NotFound(format!("Project '{id}' not found")))?;
            vec![project]
        }
        None => state.store.projects().iter().collect(),
    };

    let request = CompletionRequest {
        system: prompts::project_qa_system(&scoped)?,
        messages: vec![ChatMessage::user(question.clone())],
        max_output_tokens: PROJECT_QA_MAX_OUTPUT_TOKENS,
    };

    let answer = match state.gateway.complete(&request).await {
        Some(answer) => answer,
        None if state.config.keyword_fallback => {
            fallback::project_reply(&question, req.project_id.as_deref(), &state.store)
        }
        None => {
            return Err(AppError::Unavailable(
                "No completion provider produced an answer".to_string(),
            ))
        }
    };

    Ok(Json(ProjectQaResponse {
        answer,
        project_id: req.project_id,
    }))
}
