use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use minijinja::context;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder, TransactionTrait};
use serde::Deserialize;

use crate::{
    auth::user::{AuthSession, normalize_email},
    entities::{prelude::*, volunteer},
    error::AppError,
    forms::{blank_as_none, checkbox},
    router::AppState,
    routes::events::upsert_location,
};

#[derive(Debug, Deserialize)]
pub struct VolunteerForm {
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub skill_id: Option<i32>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub is_teacher: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub is_leader: bool,
    #[serde(default)]
    pub availability: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub travel_range: Option<i32>,
    #[serde(default)]
    pub discovery_method: String,
    #[serde(default)]
    pub notes: String,
    pub job_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteVolunteerForm {
    pub email: String,
}

pub async fn list_volunteers(
    State(state): State<AppState>,
    auth_session: AuthSession,
) -> Result<Response, AppError> {
    if auth_session.user.is_none() {
        return Ok(Redirect::to("/login?next=/volunteers").into_response());
    }

    let volunteers = Volunteer::find()
        .order_by_asc(volunteer::Column::LastName)
        .all(&state.db)
        .await?;
    let skill_levels = SkillLevel::find().all(&state.db).await?;
    let locations = Location::find().all(&state.db).await?;

    Ok(state
        .render(
            "volunteers.html",
            context! {
                volunteers => volunteers,
                skill_levels => skill_levels,
                locations => locations,
            },
        )?
        .into_response())
}

pub async fn volunteer_request(State(state): State<AppState>) -> Result<Response, AppError> {
    let skill_levels = SkillLevel::find().all(&state.db).await?;

    Ok(state
        .render(
            "volunteer_request.html",
            context! { skill_levels => skill_levels, submitted => false },
        )?
        .into_response())
}

pub async fn new_volunteer(
    State(state): State<AppState>,
    Form(form): Form<VolunteerForm>,
) -> Result<Response, AppError> {
    let email = normalize_email(&form.email);

    if Volunteer::find_by_id(&email).one(&state.db).await?.is_some() {
        return Err(AppError::BadRequest(
            "Email already used. Please use a different email.".to_string(),
        ));
    }

    let txn = state.db.begin().await?;
    upsert_location(&txn, &form.zip, &form.city, &form.state).await?;

    volunteer::ActiveModel {
        email: Set(email),
        first_name: Set(form.first_name),
        last_name: Set(form.last_name),
        skill_id: Set(form.skill_id.unwrap_or(1)),
        zip: Set(form.zip),
        phone: Set(form.phone),
        password: Set(form.password),
        is_teacher: Set(form.is_teacher),
        is_leader: Set(form.is_leader),
        availability: Set(form.availability),
        travel_range: Set(form.travel_range.unwrap_or(0)),
        discovery_method: Set(form.discovery_method),
        notes: Set(form.notes),
        job_role: Set(form.job_role.unwrap_or_else(|| "Volunteer".to_string())),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    let skill_levels = SkillLevel::find().all(&state.db).await?;
    Ok(state
        .render(
            "volunteer_request.html",
            context! { skill_levels => skill_levels, submitted => true },
        )?
        .into_response())
}

pub async fn edit_volunteer(
    State(state): State<AppState>,
    auth_session: AuthSession,
    Form(form): Form<VolunteerForm>,
) -> Result<Response, AppError> {
    if auth_session.user.is_none() {
        return Ok(Redirect::to("/login?next=/volunteers").into_response());
    }

    let email = normalize_email(&form.email);
    let txn = state.db.begin().await?;

    upsert_location(&txn, &form.zip, &form.city, &form.state).await?;

    let Some(existing) = Volunteer::find_by_id(&email).one(&txn).await? else {
        txn.rollback().await?;
        return Err(AppError::NotFound(format!("Volunteer {email} not found")));
    };

    let mut vol: volunteer::ActiveModel = existing.into();
    vol.first_name = Set(form.first_name);
    vol.last_name = Set(form.last_name);
    vol.skill_id = Set(form.skill_id.unwrap_or(1));
    vol.zip = Set(form.zip);
    vol.phone = Set(form.phone);
    vol.is_teacher = Set(form.is_teacher);
    vol.is_leader = Set(form.is_leader);
    vol.availability = Set(form.availability);
    vol.travel_range = Set(form.travel_range.unwrap_or(0));
    vol.discovery_method = Set(form.discovery_method);
    vol.notes = Set(form.notes);
    if let Some(job_role) = form.job_role {
        vol.job_role = Set(job_role);
    }
    // A blank password field leaves the stored password alone.
    if !form.password.is_empty() {
        vol.password = Set(form.password);
    }
    vol.update(&txn).await?;

    txn.commit().await?;

    Ok(Redirect::to("/volunteers").into_response())
}

pub async fn delete_volunteer(
    State(state): State<AppState>,
    Form(form): Form<DeleteVolunteerForm>,
) -> Result<Redirect, AppError> {
    Volunteer::delete_by_id(normalize_email(&form.email))
        .exec(&state.db)
        .await?;
    Ok(Redirect::to("/volunteers"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_signup_fields_accept_blank_inputs() {
        let form: VolunteerForm = serde_json::from_value(json!({
            "email": "ada@example.org",
            "travel_range": "",
            "skill_id": "",
        }))
        .unwrap();
        assert_eq!(form.travel_range, None);
        assert_eq!(form.skill_id, None);

        let form: VolunteerForm = serde_json::from_value(json!({
            "email": "ada@example.org",
            "travel_range": "25",
            "skill_id": "3",
        }))
        .unwrap();
        assert_eq!(form.travel_range, Some(25));
        assert_eq!(form.skill_id, Some(3));
    }
}
