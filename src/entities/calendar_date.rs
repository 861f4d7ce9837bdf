use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A calendar day shared across events; the date value is unique and events
/// attach through the event_date join table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "calendar_date")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub date_id: i32,
    #[sea_orm(unique)]
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_date::Entity")]
    EventDate,
}

impl Related<super::event_date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventDate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
