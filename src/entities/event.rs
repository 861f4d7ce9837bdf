use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A service or distribution activity. Status is one of Pending, Scheduled
/// or Completed; anything else sorts last in listings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub event_id: i32,
    pub start_time: Time,
    pub planned_duration: f64,
    pub address: String,
    pub zip: String,
    pub status: String,
    pub details: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::Zip",
        to = "super::location::Column::Zip"
    )]
    Location,
    #[sea_orm(has_one = "super::event_request::Entity")]
    EventRequest,
    #[sea_orm(has_one = "super::event_outcome::Entity")]
    EventOutcome,
    #[sea_orm(has_one = "super::distribution_event::Entity")]
    DistributionEvent,
    #[sea_orm(has_many = "super::event_date::Entity")]
    EventDate,
    #[sea_orm(has_many = "super::event_item::Entity")]
    EventItem,
    #[sea_orm(has_many = "super::requester::Entity")]
    Requester,
    #[sea_orm(has_many = "super::recipient::Entity")]
    Recipient,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::event_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventRequest.def()
    }
}

impl Related<super::event_outcome::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventOutcome.def()
    }
}

impl Related<super::event_date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventDate.def()
    }
}

impl Related<super::requester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requester.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
