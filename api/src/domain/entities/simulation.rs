//! Simulation domain entity
//!
//! A persisted tax simulation: the caller's inputs together with the
//! assessment the calculator produced for them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Unique identifier for a simulation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulationId(pub Uuid);

impl SimulationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SimulationId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SimulationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SimulationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored simulation (inputs + assessment)
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub id: SimulationId,
    pub owner: UserId,
    pub annual_income: Decimal,
    pub deductions: Decimal,
    pub dependents: i32,
    pub tax_base: Decimal,
    /// Marginal rate as a percent number (e.g. 7.5)
    pub rate_percent: Decimal,
    pub tax_due: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Data needed to persist a new simulation
#[derive(Debug, Clone)]
pub struct NewSimulation {
    pub owner: UserId,
    pub annual_income: Decimal,
    pub deductions: Decimal,
    pub dependents: i32,
    pub tax_base: Decimal,
    pub rate_percent: Decimal,
    pub tax_due: Decimal,
}
