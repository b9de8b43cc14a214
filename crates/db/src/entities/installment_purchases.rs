//! `SeaORM` Entity for installment_purchases table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "installment_purchases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub concept: String,
    pub total_amount: Decimal,
    pub installment_count: i32,
    pub per_installment_amount: Decimal,
    pub start_month: String,
    pub reimbursement: Option<Decimal>,
    pub payer: String,
    pub date: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::monthly_installments::Entity")]
    MonthlyInstallments,
}

impl Related<super::monthly_installments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyInstallments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
