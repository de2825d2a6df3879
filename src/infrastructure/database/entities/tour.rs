//! Tour entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tours")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub description: String,
    pub destination: String,

    pub start_date: Date,
    pub end_date: Date,

    pub price: Decimal,
    pub max_participants: i32,
    pub available_slots: i32,

    #[sea_orm(nullable)]
    pub guide_name: Option<String>,
    #[sea_orm(nullable)]
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
