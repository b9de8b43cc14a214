//! `SeaORM` Entity for monthly_installments table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "monthly_installments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub purchase_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub installment_number: i32,
    pub concept: String,
    pub month: String,
    pub original_amount: Decimal,
    pub reimbursement_applied: Decimal,
    pub payable_amount: Decimal,
    pub payer: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::installment_purchases::Entity",
        from = "Column::PurchaseId",
        to = "super::installment_purchases::Column::Id"
    )]
    InstallmentPurchases,
}

impl Related<super::installment_purchases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InstallmentPurchases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
