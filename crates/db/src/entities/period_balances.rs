//! `SeaORM` Entity for period_balances table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "period_balances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub period: String,
    pub total_manuel: Decimal,
    pub total_pablo: Decimal,
    pub difference: Decimal,
    pub debtor: Option<String>,
    pub amount_owed: Decimal,
    pub simple_manuel: Decimal,
    pub simple_pablo: Decimal,
    pub installment_manuel: Decimal,
    pub installment_pablo: Decimal,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
