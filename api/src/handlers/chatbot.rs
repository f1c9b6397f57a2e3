//! Chatbot handlers
//!
//! Question/answer proxy plus per-caller history. Both endpoints accept
//! guests; authenticated callers get their own history.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::auth::SessionIdentity;
use crate::domain::entities::Conversation;
use crate::error::AppError;
use crate::AppState;

/// Request body for a chatbot question
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub timestamp: String,
}

/// POST /chatbot/message
pub async fn post_message(
    State(state): State<AppState>,
    identity: Option<Extension<SessionIdentity>>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = non_empty(request.message).ok_or_else(|| {
        AppError::BadRequest("Mensagem não pode estar vazia".to_string())
    })?;

    let owner = identity.map(|Extension(identity)| identity.user.id);
    let conversation = state.chat_service.send(owner, &message).await?;

    Ok(Json(MessageResponse {
        message: conversation.bot_response,
        timestamp: conversation.created_at.to_rfc3339(),
    }))
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct ConversationDto {
    pub id: String,
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: String,
}

impl From<Conversation> for ConversationDto {
    fn from(conversation: Conversation) -> Self {
        ConversationDto {
            id: conversation.id.to_string(),
            user_message: conversation.user_message,
            bot_response: conversation.bot_response,
            timestamp: conversation.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub conversations: Vec<ConversationDto>,
}

/// GET /chatbot/history?limit=N
pub async fn chat_history(
    State(state): State<AppState>,
    identity: Option<Extension<SessionIdentity>>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, AppError> {
    let limit = params.limit.clamp(1, 100);
    let owner = identity.map(|Extension(identity)| identity.user.id);

    let conversations = state.chat_service.history(owner.as_ref(), limit).await?;

    Ok(Json(HistoryResponse {
        conversations: conversations.into_iter().map(Into::into).collect(),
    }))
}
