//! PostgreSQL adapter for SimulationRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{NewSimulation, Simulation, SimulationId, UserId};
use crate::domain::ports::SimulationRepository;
use crate::entity::simulations;
use crate::error::DomainError;

/// PostgreSQL implementation of SimulationRepository
pub struct PostgresSimulationRepository {
    db: DatabaseConnection,
}

impl PostgresSimulationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SimulationRepository for PostgresSimulationRepository {
    async fn create(&self, simulation: &NewSimulation) -> Result<Simulation, DomainError> {
        let model = simulations::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(simulation.owner.0),
            annual_income: Set(simulation.annual_income),
            deductions: Set(simulation.deductions),
            dependents: Set(simulation.dependents),
            tax_base: Set(simulation.tax_base),
            rate_percent: Set(simulation.rate_percent),
            tax_due: Set(simulation.tax_due),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_recent_by_owner(
        &self,
        owner: &UserId,
        limit: i64,
    ) -> Result<Vec<Simulation>, DomainError> {
        let results = simulations::Entity::find()
            .filter(simulations::Column::UserId.eq(owner.0))
            .order_by_desc(simulations::Column::CreatedAt)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<simulations::Model> for Simulation {
    fn from(model: simulations::Model) -> Self {
        Simulation {
            id: SimulationId(model.id),
            owner: UserId(model.user_id),
            annual_income: model.annual_income,
            deductions: model.deductions,
            dependents: model.dependents,
            tax_base: model.tax_base,
            rate_percent: model.rate_percent,
            tax_due: model.tax_due,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
