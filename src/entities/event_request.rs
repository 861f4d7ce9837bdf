use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Service-event request attributes, one row per event: what the hosting
/// organization asked for and what the venue can hold.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "event_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: i32,
    pub service_type_id: i32,
    pub organization: String,
    pub wants_story: bool,
    pub story_minutes: i32,
    pub sergers: i32,
    pub sewing_machines: i32,
    pub children_under_10: i32,
    pub adult_participants: i32,
    pub advanced_sewers: i32,
    pub basic_sewers: i32,
    pub venue_size: i32,
    pub num_rooms: i32,
    pub num_tables_round: i32,
    pub num_tables_rectangle: i32,
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
        belongs_to = "super::service_type::Entity",
        from = "Column::ServiceTypeId",
        to = "super::service_type::Column::ServiceTypeId"
    )]
    ServiceType,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::service_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
