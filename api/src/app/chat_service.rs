//! Chat service
//!
//! Proxies user questions to the generative model with a fixed
//! income-tax assistant context and persists every exchange.

use std::sync::Arc;

use crate::domain::entities::{Conversation, NewConversation, UserId};
use crate::domain::ports::{ConversationRepository, TextGenerator};
use crate::error::AppError;

/// System context prepended to every question
const SYSTEM_CONTEXT: &str = "Você é o Leão, um assistente virtual especializado em \
Imposto de Renda brasileiro. Seu papel é ajudar as pessoas a entenderem melhor a \
declaração de IR e responder dúvidas sobre:
- Quem precisa declarar IR
- Prazos e documentos necessários
- Deduções permitidas
- Como declarar diferentes tipos de renda
- Restituição e impostos a pagar

Seja sempre educado, claro e objetivo. Se não souber algo com certeza, oriente a \
pessoa a consultar a Receita Federal ou um contador.";

/// Service for the IR chatbot
pub struct ChatService<CR, AI>
where
    CR: ConversationRepository,
    AI: TextGenerator,
{
    conversations: Arc<CR>,
    ai: Arc<AI>,
}

impl<CR, AI> ChatService<CR, AI>
where
    CR: ConversationRepository,
    AI: TextGenerator,
{
    pub fn new(conversations: Arc<CR>, ai: Arc<AI>) -> Self {
        Self { conversations, ai }
    }

    /// Send a question to the model and persist the exchange.
    ///
    /// `owner` is `None` for guests; their exchanges land in the shared
    /// anonymous history.
    pub async fn send(
        &self,
        owner: Option<UserId>,
        message: &str,
    ) -> Result<Conversation, AppError> {
        let prompt = format!("{SYSTEM_CONTEXT}\n\nPergunta do usuário: {message}\n\nResposta:");

        let reply = self.ai.generate(&prompt).await?;

        let conversation = self
            .conversations
            .create(&NewConversation {
                owner,
                user_message: message.to_string(),
                bot_response: reply,
            })
            .await?;

        Ok(conversation)
    }

    /// Most recent exchanges for the caller, newest first
    pub async fn history(
        &self,
        owner: Option<&UserId>,
        limit: i64,
    ) -> Result<Vec<Conversation>, AppError> {
        Ok(self.conversations.find_recent(owner, limit).await?)
    }
}
