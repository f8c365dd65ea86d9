use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub identity: String,
    pub secret: String,
    #[sea_orm(column_type = "Double")]
    pub compensation: f64,
    #[sea_orm(column_name = "adjustment_date")]
    pub adjustment_date: PrimitiveDateTime,
    #[sea_orm(column_name = "current_token", unique, nullable)]
    pub current_token: Option<String>,
    #[sea_orm(column_name = "token_expiry", nullable)]
    pub token_expiry: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
