//! Account handlers
//!
//! Registration, login, logout and profile endpoints.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::auth::SessionIdentity;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::AppState;

/// Request body for registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    #[serde(default)]
    pub cpf: String,
}

/// User fields echoed back after register/login
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub nome: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id.to_string(),
            nome: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let (Some(nome), Some(email), Some(senha)) = (
        non_empty(request.nome),
        non_empty(request.email),
        non_empty(request.senha),
    ) else {
        return Err(AppError::BadRequest(
            "Todos os campos são obrigatórios".to_string(),
        ));
    };

    let user = state
        .account_service
        .register(&nome, &email, &senha, request.cpf.trim())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Cadastro realizado com sucesso!".to_string(),
            user: UserSummary::from(&user),
        }),
    ))
}

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    /// Session token; send back as `Authorization: Bearer <token>`
    pub token: String,
    pub user: UserSummary,
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (Some(email), Some(senha)) = (non_empty(request.email), non_empty(request.senha)) else {
        return Err(AppError::BadRequest(
            "Email e senha são obrigatórios".to_string(),
        ));
    };

    let (user, token) = state.account_service.login(&email, &senha).await?;

    Ok(Json(LoginResponse {
        message: "Login realizado com sucesso!".to_string(),
        token,
        user: UserSummary::from(&user),
    }))
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<Json<LogoutResponse>, AppError> {
    state.account_service.logout(&identity.session_id).await?;

    Ok(Json(LogoutResponse {
        message: "Logout realizado com sucesso!".to_string(),
    }))
}

/// Full profile, without credentials
#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub nome: String,
    pub email: String,
    pub cpf: String,
    pub data_cadastro: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: ProfileDto,
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<Json<MeResponse>, AppError> {
    // Re-read so a concurrently updated profile is reflected
    let user = state
        .account_service
        .find_by_id(&identity.user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

    Ok(Json(MeResponse {
        user: ProfileDto {
            id: user.id.to_string(),
            nome: user.name,
            email: user.email,
            cpf: user.cpf,
            data_cadastro: user.created_at.to_rfc3339(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_register_request_full() {
        let json = r#"{"nome": "Ana", "email": "ana@example.com", "senha": "s3nh4", "cpf": "123.456.789-00"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.nome.as_deref(), Some("Ana"));
        assert_eq!(request.cpf, "123.456.789-00");
    }

    #[test]
    fn parse_register_request_cpf_defaults_empty() {
        let json = r#"{"nome": "Ana", "email": "ana@example.com", "senha": "s3nh4"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.cpf, "");
    }

    #[test]
    fn parse_login_request_tolerates_missing_fields() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_none());
        assert!(request.senha.is_none());
    }

    #[test]
    fn serialize_login_response() {
        let response = LoginResponse {
            message: "Login realizado com sucesso!".to_string(),
            token: "st-abc".to_string(),
            user: UserSummary {
                id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
                nome: "Ana".to_string(),
                email: "ana@example.com".to_string(),
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["token"], "st-abc");
        assert_eq!(value["user"]["nome"], "Ana");
    }
}
