use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "service_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub service_type_id: i32,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_request::Entity")]
    EventRequest,
}

impl Related<super::event_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
