use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A registered volunteer. The email is the key and doubles as the login
/// identity; the password column is compared verbatim at login.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "volunteer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub skill_id: i32,
    pub zip: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_teacher: bool,
    pub is_leader: bool,
    pub availability: String,
    pub travel_range: i32,
    pub discovery_method: String,
    pub notes: String,
    pub job_role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::skill_level::Entity",
        from = "Column::SkillId",
        to = "super::skill_level::Column::SkillId"
    )]
    SkillLevel,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::Zip",
        to = "super::location::Column::Zip"
    )]
    Location,
}

impl Related<super::skill_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillLevel.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
