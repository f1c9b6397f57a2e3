//! Simulation service
//!
//! Runs the tax calculator and keeps a per-user history of the results.
//! Guests can simulate freely; only authenticated runs are persisted.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{NewSimulation, Simulation, UserId};
use crate::domain::ports::SimulationRepository;
use crate::domain::tax::{self, Assessment};
use crate::error::AppError;

/// How many records the history endpoint returns
pub const HISTORY_LIMIT: i64 = 10;

/// Inputs of one simulation run, already coerced to numbers
#[derive(Debug, Clone, Copy)]
pub struct SimulationInput {
    pub annual_income: Decimal,
    pub deductions: Decimal,
    pub dependents: i32,
}

/// Service for tax simulations
pub struct SimulationService<SR>
where
    SR: SimulationRepository,
{
    simulations: Arc<SR>,
}

impl<SR> SimulationService<SR>
where
    SR: SimulationRepository,
{
    pub fn new(simulations: Arc<SR>) -> Self {
        Self { simulations }
    }

    /// Run the calculator; persist the record when the caller is known
    pub async fn run(
        &self,
        owner: Option<&UserId>,
        input: &SimulationInput,
    ) -> Result<Assessment, AppError> {
        let assessment = tax::calculate(input.annual_income, input.deductions, input.dependents);

        if let Some(owner) = owner {
            self.simulations
                .create(&NewSimulation {
                    owner: *owner,
                    annual_income: input.annual_income,
                    deductions: input.deductions,
                    dependents: input.dependents,
                    tax_base: assessment.tax_base,
                    rate_percent: assessment.rate_percent,
                    tax_due: assessment.tax_due,
                })
                .await?;
        }

        Ok(assessment)
    }

    /// Up to [`HISTORY_LIMIT`] most recent simulations, newest first
    pub async fn history(&self, owner: &UserId) -> Result<Vec<Simulation>, AppError> {
        Ok(self
            .simulations
            .find_recent_by_owner(owner, HISTORY_LIMIT)
            .await?)
    }
}
