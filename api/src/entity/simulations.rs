use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "simulations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub annual_income: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub deductions: Decimal,
    pub dependents: i32,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub tax_base: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub rate_percent: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub tax_due: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
