use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "event_date")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub date_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::EventId"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::calendar_date::Entity",
        from = "Column::DateId",
        to = "super::calendar_date::Column::DateId"
    )]
    CalendarDate,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::calendar_date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CalendarDate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
