//! Service-level integration tests
//!
//! Wire the application services against the in-memory mocks and run the
//! user-facing flows end to end: account lifecycle, chatbot exchange,
//! document upload and simulation history.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::app::{AccountService, ChatService, DocumentService, SimulationService};
    use crate::domain::entities::DocumentStatus;
    use crate::test_utils::{
        InMemoryConversationRepository, InMemoryDocumentRepository, InMemorySessionRepository,
        InMemorySimulationRepository, InMemoryUserRepository, MockDocumentStore,
        MockTextGenerator,
    };

    fn account_service() -> AccountService<InMemoryUserRepository, InMemorySessionRepository> {
        AccountService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
        )
    }

    /// Basic smoke test - verify services can be created
    #[tokio::test]
    async fn services_can_be_created() {
        let _account_service = account_service();

        let _chat_service = ChatService::new(
            Arc::new(InMemoryConversationRepository::new()),
            Arc::new(MockTextGenerator::with_reply("ok")),
        );

        let _document_service = DocumentService::new(
            Arc::new(InMemoryDocumentRepository::new()),
            Arc::new(MockDocumentStore::new()),
            Arc::new(MockTextGenerator::with_reply("ok")),
        );

        let _simulation_service =
            SimulationService::new(Arc::new(InMemorySimulationRepository::new()));
    }

    /// Full account lifecycle: register, login, authenticate, logout
    #[tokio::test]
    async fn account_lifecycle() {
        let accounts = account_service();

        let user = accounts
            .register("Ana Souza", "ana@example.com", "senha123", "123.456.789-00")
            .await
            .unwrap();
        assert_eq!(user.name, "Ana Souza");

        let (logged_in, token) = accounts.login("ana@example.com", "senha123").await.unwrap();
        assert_eq!(logged_in.id, user.id);

        let (authed, session_id) = accounts.authenticate(&token).await.unwrap().unwrap();
        assert_eq!(authed.cpf, "123.456.789-00");

        accounts.logout(&session_id).await.unwrap();
        assert!(accounts.authenticate(&token).await.unwrap().is_none());
    }

    /// Chat histories are separated between users and guests
    #[tokio::test]
    async fn chat_history_is_owner_scoped() {
        let accounts = account_service();
        let user = accounts
            .register("Ana", "ana@example.com", "senha123", "")
            .await
            .unwrap();

        let chat = ChatService::new(
            Arc::new(InMemoryConversationRepository::new()),
            Arc::new(MockTextGenerator::with_reply("Declare até o fim de maio.")),
        );

        chat.send(Some(user.id), "Qual o prazo?").await.unwrap();
        chat.send(None, "Pergunta de visitante").await.unwrap();

        let user_history = chat.history(Some(&user.id), 20).await.unwrap();
        assert_eq!(user_history.len(), 1);
        assert_eq!(user_history[0].user_message, "Qual o prazo?");
        assert_eq!(user_history[0].bot_response, "Declare até o fim de maio.");

        let guest_history = chat.history(None, 20).await.unwrap();
        assert_eq!(guest_history.len(), 1);
        assert_eq!(guest_history[0].user_message, "Pergunta de visitante");
    }

    /// Chat history honors the requested limit, newest first
    #[tokio::test]
    async fn chat_history_limit() {
        let chat = ChatService::new(
            Arc::new(InMemoryConversationRepository::new()),
            Arc::new(MockTextGenerator::with_reply("resposta")),
        );

        for i in 0..5 {
            chat.send(None, &format!("pergunta {i}")).await.unwrap();
        }

        let history = chat.history(None, 3).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].user_message, "pergunta 4");
        assert_eq!(history[2].user_message, "pergunta 2");
    }

    /// Upload, analyze and list a document
    #[tokio::test]
    async fn document_upload_flow() {
        let accounts = account_service();
        let user = accounts
            .register("Ana", "ana@example.com", "senha123", "")
            .await
            .unwrap();

        let documents = Arc::new(InMemoryDocumentRepository::new());
        let service = DocumentService::new(
            documents.clone(),
            Arc::new(MockDocumentStore::new()),
            Arc::new(MockTextGenerator::with_reply("Comprovante de renda.")),
        );

        let uploaded = service
            .upload(&user.id, "informe-rendimentos.pdf", b"%PDF-1.4")
            .await
            .unwrap();
        assert_eq!(uploaded.status, DocumentStatus::Analyzed);

        let listed = service.list(&user.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].original_filename, "informe-rendimentos.pdf");
        assert_eq!(listed[0].analysis.as_deref(), Some("Comprovante de renda."));
    }

    /// Authenticated simulations accumulate into a capped history
    #[tokio::test]
    async fn simulation_flow_persists_for_users_only() {
        let accounts = account_service();
        let user = accounts
            .register("Ana", "ana@example.com", "senha123", "")
            .await
            .unwrap();

        let simulations = Arc::new(InMemorySimulationRepository::new());
        let service = SimulationService::new(simulations.clone());

        // Guest run: assessed but not stored
        let guest = service
            .run(
                None,
                &crate::app::SimulationInput {
                    annual_income: dec!(30000),
                    deductions: dec!(0),
                    dependents: 0,
                },
            )
            .await
            .unwrap();
        assert_eq!(guest.tax_due, dec!(536.42));
        assert!(simulations.is_empty());

        // Authenticated runs land in history
        for i in 0..12 {
            service
                .run(
                    Some(&user.id),
                    &crate::app::SimulationInput {
                        annual_income: dec!(60000) + rust_decimal::Decimal::from(i),
                        deductions: dec!(0),
                        dependents: 0,
                    },
                )
                .await
                .unwrap();
        }

        let history = service.history(&user.id).await.unwrap();
        assert_eq!(history.len(), 10);
        assert_eq!(history[0].annual_income, dec!(60011));
        assert_eq!(history[0].rate_percent, dec!(27.5));
    }
}
