//! Simulation handlers
//!
//! The tax calculator endpoint and the caller's simulation history.
//! Input fields tolerate anything the frontend sends: numbers, numeric
//! strings, null or nothing at all - everything else coerces to zero.

use axum::{extract::State, Extension, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::app::SimulationInput;
use crate::auth::SessionIdentity;
use crate::domain::entities::Simulation;
use crate::error::AppError;
use crate::AppState;

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(value)) => value,
        Some(Raw::Text(text)) => text.trim().parse().unwrap_or_default(),
        None => Decimal::ZERO,
    })
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => n,
        Some(Raw::Float(f)) => f as i64,
        Some(Raw::Text(text)) => text.trim().parse().unwrap_or_default(),
        None => 0,
    };

    Ok(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Request body for a simulation run
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub renda_anual: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub deducoes: Decimal,
    #[serde(default, deserialize_with = "lenient_int")]
    pub dependentes: i32,
}

/// Echo of the inputs plus the assessment, in the public wire format
#[derive(Debug, Serialize)]
pub struct ResultadoDto {
    #[serde(with = "rust_decimal::serde::float")]
    pub renda_anual: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub deducoes: Decimal,
    pub dependentes: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_calculo: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub aliquota: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub imposto_devido: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub resultado: ResultadoDto,
}

/// POST /api/simulation/calculate
///
/// Guests get the assessment; logged-in callers also get it stored in
/// their history.
pub async fn calculate(
    State(state): State<AppState>,
    identity: Option<Extension<SessionIdentity>>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, AppError> {
    let input = SimulationInput {
        annual_income: request.renda_anual,
        deductions: request.deducoes,
        dependents: request.dependentes,
    };

    let owner = identity.map(|Extension(identity)| identity.user.id);
    let assessment = state.simulation_service.run(owner.as_ref(), &input).await?;

    Ok(Json(CalculateResponse {
        resultado: ResultadoDto {
            renda_anual: request.renda_anual,
            deducoes: request.deducoes,
            dependentes: request.dependentes,
            base_calculo: assessment.tax_base,
            aliquota: assessment.rate_percent,
            imposto_devido: assessment.tax_due,
        },
    }))
}

/// One stored simulation, without internal storage fields
#[derive(Debug, Serialize)]
pub struct SimulationDto {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub renda_anual: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub deducoes: Decimal,
    pub dependentes: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_calculo: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub aliquota: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub imposto_devido: Decimal,
    pub data_simulacao: String,
}

impl From<Simulation> for SimulationDto {
    fn from(simulation: Simulation) -> Self {
        SimulationDto {
            id: simulation.id.to_string(),
            renda_anual: simulation.annual_income,
            deducoes: simulation.deductions,
            dependentes: simulation.dependents,
            base_calculo: simulation.tax_base,
            aliquota: simulation.rate_percent,
            imposto_devido: simulation.tax_due,
            data_simulacao: simulation.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SimulationHistoryResponse {
    pub simulations: Vec<SimulationDto>,
}

/// GET /api/simulation/history
pub async fn simulation_history(
    State(state): State<AppState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<Json<SimulationHistoryResponse>, AppError> {
    let simulations = state.simulation_service.history(&identity.user.id).await?;

    Ok(Json(SimulationHistoryResponse {
        simulations: simulations.into_iter().map(Into::into).collect(),
    }))
}
