use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use chrono::{NaiveDate, NaiveTime};
use minijinja::context;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait, sea_query::OnConflict,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::user::AuthSession,
    entities::{
        calendar_date, event, event_date, event_item, event_outcome, event_request, item,
        location, prelude::*, requester,
    },
    error::AppError,
    forms::{blank_as_none, checkbox, parse_date, parse_time, zip_contacts, zip_line_items},
    router::AppState,
};

/// Host-an-event submission for a service (sewing) event. Requester fields
/// arrive as parallel arrays, one entry per contact person row in the form.
#[derive(Debug, Deserialize)]
pub struct ServiceEventForm {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: Vec<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub planned_duration: Option<f64>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub service_type_id: Option<i32>,
    #[serde(default, deserialize_with = "checkbox")]
    pub wants_story: bool,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub story_minutes: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sergers: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sewing_machines: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub children_under_10: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub adult_participants: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub advanced_sewers: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub basic_sewers: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub venue_size: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub num_rooms: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub num_tables_round: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub num_tables_rectangle: Option<i32>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub first_name: Vec<String>,
    #[serde(default)]
    pub last_name: Vec<String>,
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub phone: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DistributionEventForm {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: Vec<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub planned_duration: Option<f64>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Deserialize)]
pub struct EditEventForm {
    pub event_id: i32,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: Vec<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub planned_duration: Option<f64>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub service_type_id: Option<i32>,
    #[serde(default, deserialize_with = "checkbox")]
    pub wants_story: bool,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub story_minutes: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sergers: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sewing_machines: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub children_under_10: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub adult_participants: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub advanced_sewers: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub basic_sewers: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub venue_size: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub num_rooms: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub num_tables_round: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub num_tables_rectangle: Option<i32>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub first_name: Vec<String>,
    #[serde(default)]
    pub last_name: Vec<String>,
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub phone: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub headcount: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub service_hours: Option<f64>,
    #[serde(default)]
    pub item: Vec<String>,
    #[serde(default)]
    pub quantity: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteEventForm {
    pub event_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct DeleteDateForm {
    pub event_id: i32,
    pub date: String,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct EventListRow {
    pub event_id: i32,
    pub status: String,
    pub address: String,
    pub date: Option<NaiveDate>,
    pub organization: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct EventDetailRow {
    pub event_id: i32,
    pub start_time: NaiveTime,
    pub planned_duration: f64,
    pub address: String,
    pub zip: String,
    pub status: String,
    pub details: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub service_type_id: Option<i32>,
    pub organization: Option<String>,
    pub wants_story: Option<bool>,
    pub story_minutes: Option<i32>,
    pub sergers: Option<i32>,
    pub sewing_machines: Option<i32>,
    pub children_under_10: Option<i32>,
    pub adult_participants: Option<i32>,
    pub advanced_sewers: Option<i32>,
    pub basic_sewers: Option<i32>,
    pub venue_size: Option<i32>,
    pub num_rooms: Option<i32>,
    pub num_tables_round: Option<i32>,
    pub num_tables_rectangle: Option<i32>,
    pub service_type: Option<String>,
    pub temperature: Option<i32>,
    pub headcount: Option<i32>,
    pub service_hours: Option<f64>,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct LineItemRow {
    pub item_id: i32,
    pub description: String,
    pub quantity: i32,
}

/// Listing order: Pending first, then Scheduled, then Completed, then
/// anything else.
fn status_rank(status: &str) -> u8 {
    match status {
        "Pending" => 0,
        "Scheduled" => 1,
        "Completed" => 2,
        _ => 3,
    }
}

pub async fn list_events(
    State(state): State<AppState>,
    auth_session: AuthSession,
) -> Result<Response, AppError> {
    if auth_session.user.is_none() {
        return Ok(Redirect::to("/login?next=/events").into_response());
    }

    let mut rows = Event::find()
        .join(JoinType::LeftJoin, event::Relation::EventDate.def())
        .join(JoinType::LeftJoin, event_date::Relation::CalendarDate.def())
        .join(JoinType::LeftJoin, event::Relation::Location.def())
        .join(JoinType::LeftJoin, event::Relation::EventRequest.def())
        .select_only()
        .column(event::Column::EventId)
        .column(event::Column::Status)
        .column(event::Column::Address)
        .column(calendar_date::Column::Date)
        .column(event_request::Column::Organization)
        .column(location::Column::City)
        .column(location::Column::State)
        .into_model::<EventListRow>()
        .all(&state.db)
        .await?;

    rows.sort_by_key(|r| (status_rank(&r.status), r.date));

    let service_types = ServiceType::find().all(&state.db).await?;

    Ok(state
        .render(
            "events.html",
            context! { events => rows, service_types => service_types },
        )?
        .into_response())
}

pub async fn event_detail(
    State(state): State<AppState>,
    auth_session: AuthSession,
    Path(event_id): Path<i32>,
) -> Result<Response, AppError> {
    if auth_session.user.is_none() {
        return Ok(Redirect::to("/login?next=/events").into_response());
    }

    let detail = Event::find_by_id(event_id)
        .join(JoinType::LeftJoin, event::Relation::Location.def())
        .join(JoinType::LeftJoin, event::Relation::EventRequest.def())
        .join(JoinType::LeftJoin, event_request::Relation::ServiceType.def())
        .join(JoinType::LeftJoin, event::Relation::DistributionEvent.def())
        .join(JoinType::LeftJoin, event::Relation::EventOutcome.def())
        .select_only()
        .columns([
            event::Column::EventId,
            event::Column::StartTime,
            event::Column::PlannedDuration,
            event::Column::Address,
            event::Column::Zip,
            event::Column::Status,
            event::Column::Details,
        ])
        .column(crate::entities::location::Column::City)
        .column(crate::entities::location::Column::State)
        .columns([
            event_request::Column::ServiceTypeId,
            event_request::Column::Organization,
            event_request::Column::WantsStory,
            event_request::Column::StoryMinutes,
            event_request::Column::Sergers,
            event_request::Column::SewingMachines,
            event_request::Column::ChildrenUnder10,
            event_request::Column::AdultParticipants,
            event_request::Column::AdvancedSewers,
            event_request::Column::BasicSewers,
            event_request::Column::VenueSize,
            event_request::Column::NumRooms,
            event_request::Column::NumTablesRound,
            event_request::Column::NumTablesRectangle,
        ])
        .column_as(
            crate::entities::service_type::Column::Description,
            "service_type",
        )
        .column(crate::entities::distribution_event::Column::Temperature)
        .column(event_outcome::Column::Headcount)
        .column(event_outcome::Column::ServiceHours)
        .into_model::<EventDetailRow>()
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {event_id} not found")))?;

    let dates = CalendarDate::find()
        .join(JoinType::InnerJoin, calendar_date::Relation::EventDate.def())
        .filter(event_date::Column::EventId.eq(event_id))
        .order_by_asc(calendar_date::Column::Date)
        .all(&state.db)
        .await?;

    let requesters = Requester::find()
        .filter(requester::Column::EventId.eq(event_id))
        .all(&state.db)
        .await?;

    let recipients = Recipient::find()
        .filter(crate::entities::recipient::Column::EventId.eq(event_id))
        .all(&state.db)
        .await?;

    let event_items = EventItem::find()
        .join(JoinType::InnerJoin, event_item::Relation::Item.def())
        .filter(event_item::Column::EventId.eq(event_id))
        .select_only()
        .column(event_item::Column::ItemId)
        .column(item::Column::Description)
        .column(event_item::Column::Quantity)
        .into_model::<LineItemRow>()
        .all(&state.db)
        .await?;

    let service_types = ServiceType::find().all(&state.db).await?;
    let items = Item::find().all(&state.db).await?;

    Ok(state
        .render(
            "event_detail.html",
            context! {
                event => detail,
                dates => dates,
                requesters => requesters,
                recipients => recipients,
                event_items => event_items,
                service_types => service_types,
                items => items,
            },
        )?
        .into_response())
}

pub async fn add_service_event(
    State(state): State<AppState>,
    Form(form): Form<ServiceEventForm>,
) -> Result<Redirect, AppError> {
    let txn = state.db.begin().await?;

    upsert_location(&txn, &form.zip, &form.city, &form.state).await?;
    let event = insert_event(
        &txn,
        &form.start_time,
        form.planned_duration,
        &form.address,
        &form.zip,
        &form.status,
        &form.details,
    )
    .await?;

    event_request::ActiveModel {
        event_id: Set(event.event_id),
        service_type_id: Set(form.service_type_id.unwrap_or(1)),
        organization: Set(form.organization.clone()),
        wants_story: Set(form.wants_story),
        story_minutes: Set(form.story_minutes.unwrap_or(0)),
        sergers: Set(form.sergers.unwrap_or(0)),
        sewing_machines: Set(form.sewing_machines.unwrap_or(0)),
        children_under_10: Set(form.children_under_10.unwrap_or(0)),
        adult_participants: Set(form.adult_participants.unwrap_or(0)),
        advanced_sewers: Set(form.advanced_sewers.unwrap_or(0)),
        basic_sewers: Set(form.basic_sewers.unwrap_or(0)),
        venue_size: Set(form.venue_size.unwrap_or(0)),
        num_rooms: Set(form.num_rooms.unwrap_or(0)),
        num_tables_round: Set(form.num_tables_round.unwrap_or(0)),
        num_tables_rectangle: Set(form.num_tables_rectangle.unwrap_or(0)),
    }
    .insert(&txn)
    .await?;

    for contact in zip_contacts(&form.first_name, &form.last_name, &form.email, &form.phone) {
        requester::ActiveModel {
            event_id: Set(event.event_id),
            first_name: Set(contact.first_name),
            last_name: Set(contact.last_name),
            phone: Set(contact.phone),
            email: Set(contact.email),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    link_event_dates(&txn, event.event_id, &form.date).await?;
    txn.commit().await?;

    Ok(Redirect::to("/events"))
}

pub async fn add_distribution_event(
    State(state): State<AppState>,
    Form(form): Form<DistributionEventForm>,
) -> Result<Redirect, AppError> {
    let txn = state.db.begin().await?;

    upsert_location(&txn, &form.zip, &form.city, &form.state).await?;
    let event = insert_event(
        &txn,
        &form.start_time,
        form.planned_duration,
        &form.address,
        &form.zip,
        &form.status,
        &form.details,
    )
    .await?;

    link_event_dates(&txn, event.event_id, &form.date).await?;
    txn.commit().await?;

    Ok(Redirect::to("/events"))
}

pub async fn edit_event(
    State(state): State<AppState>,
    auth_session: AuthSession,
    Form(form): Form<EditEventForm>,
) -> Result<Response, AppError> {
    if auth_session.user.is_none() {
        return Ok(Redirect::to("/login?next=/events").into_response());
    }

    let txn = state.db.begin().await?;

    upsert_location(&txn, &form.zip, &form.city, &form.state).await?;

    let Some(existing) = Event::find_by_id(form.event_id).one(&txn).await? else {
        txn.rollback().await?;
        return Err(AppError::NotFound(format!(
            "Event {} not found",
            form.event_id
        )));
    };
    let mut ev: event::ActiveModel = existing.into();
    ev.start_time = Set(parse_time(&form.start_time));
    ev.planned_duration = Set(form.planned_duration.unwrap_or(0.0));
    ev.address = Set(form.address.clone());
    ev.zip = Set(default_zip(&form.zip));
    ev.status = Set(default_status(&form.status));
    ev.details = Set(form.details.clone());
    ev.update(&txn).await?;

    if let Some(request) = EventRequest::find_by_id(form.event_id).one(&txn).await? {
        let mut req: event_request::ActiveModel = request.into();
        req.service_type_id = Set(form.service_type_id.unwrap_or(1));
        req.organization = Set(form.organization.clone());
        req.wants_story = Set(form.wants_story);
        req.story_minutes = Set(form.story_minutes.unwrap_or(0));
        req.sergers = Set(form.sergers.unwrap_or(0));
        req.sewing_machines = Set(form.sewing_machines.unwrap_or(0));
        req.children_under_10 = Set(form.children_under_10.unwrap_or(0));
        req.adult_participants = Set(form.adult_participants.unwrap_or(0));
        req.advanced_sewers = Set(form.advanced_sewers.unwrap_or(0));
        req.basic_sewers = Set(form.basic_sewers.unwrap_or(0));
        req.venue_size = Set(form.venue_size.unwrap_or(0));
        req.num_rooms = Set(form.num_rooms.unwrap_or(0));
        req.num_tables_round = Set(form.num_tables_round.unwrap_or(0));
        req.num_tables_rectangle = Set(form.num_tables_rectangle.unwrap_or(0));
        req.update(&txn).await?;
    }

    match EventOutcome::find_by_id(form.event_id).one(&txn).await? {
        Some(outcome) => {
            let mut oc: event_outcome::ActiveModel = outcome.into();
            oc.headcount = Set(form.headcount.unwrap_or(0));
            oc.service_hours = Set(form.service_hours.unwrap_or(0.0));
            oc.update(&txn).await?;
        }
        None if form.headcount.is_some() || form.service_hours.is_some() => {
            event_outcome::ActiveModel {
                event_id: Set(form.event_id),
                headcount: Set(form.headcount.unwrap_or(0)),
                service_hours: Set(form.service_hours.unwrap_or(0.0)),
            }
            .insert(&txn)
            .await?;
        }
        None => {}
    }

    for (item_id, quantity) in zip_line_items(&form.item, &form.quantity) {
        match EventItem::find_by_id((form.event_id, item_id)).one(&txn).await? {
            Some(line) => {
                let mut li: event_item::ActiveModel = line.into();
                li.quantity = Set(quantity);
                li.update(&txn).await?;
            }
            None => {
                event_item::ActiveModel {
                    event_id: Set(form.event_id),
                    item_id: Set(item_id),
                    quantity: Set(quantity),
                }
                .insert(&txn)
                .await?;
            }
        }
    }

    // Requesters are matched by first name within the event, like the form
    // rows they came from.
    for contact in zip_contacts(&form.first_name, &form.last_name, &form.email, &form.phone) {
        let existing = Requester::find()
            .filter(requester::Column::EventId.eq(form.event_id))
            .filter(requester::Column::FirstName.eq(&contact.first_name))
            .one(&txn)
            .await?;
        match existing {
            Some(row) => {
                let mut req: requester::ActiveModel = row.into();
                req.last_name = Set(contact.last_name);
                req.phone = Set(contact.phone);
                req.email = Set(contact.email);
                req.update(&txn).await?;
            }
            None => {
                requester::ActiveModel {
                    event_id: Set(form.event_id),
                    first_name: Set(contact.first_name),
                    last_name: Set(contact.last_name),
                    phone: Set(contact.phone),
                    email: Set(contact.email),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
            }
        }
    }

    // Date links are rebuilt from scratch on every edit.
    EventDate::delete_many()
        .filter(event_date::Column::EventId.eq(form.event_id))
        .exec(&txn)
        .await?;
    link_event_dates(&txn, form.event_id, &form.date).await?;

    txn.commit().await?;

    Ok(Redirect::to(&format!("/events/{}", form.event_id)).into_response())
}

pub async fn delete_event(
    State(state): State<AppState>,
    Form(form): Form<DeleteEventForm>,
) -> Result<Redirect, AppError> {
    // Dependent rows go with it via ON DELETE CASCADE.
    Event::delete_by_id(form.event_id).exec(&state.db).await?;
    Ok(Redirect::to("/events"))
}

pub async fn delete_date(
    State(state): State<AppState>,
    Form(form): Form<DeleteDateForm>,
) -> Result<&'static str, AppError> {
    let Some(parsed) = parse_date(&form.date) else {
        return Err(AppError::BadRequest("Unrecognized date".to_string()));
    };

    let Some(calendar_date) = CalendarDate::find()
        .filter(calendar_date::Column::Date.eq(parsed))
        .one(&state.db)
        .await?
    else {
        return Err(AppError::NotFound("Date not found.".to_string()));
    };

    let result = EventDate::delete_many()
        .filter(event_date::Column::EventId.eq(form.event_id))
        .filter(event_date::Column::DateId.eq(calendar_date.date_id))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(
            "No matching event dates found.".to_string(),
        ));
    }

    Ok("Date deleted successfully.")
}

fn default_zip(zip: &str) -> String {
    if zip.trim().is_empty() {
        "00000".to_string()
    } else {
        zip.to_string()
    }
}

fn default_status(status: &str) -> String {
    if status.trim().is_empty() {
        "Pending".to_string()
    } else {
        status.to_string()
    }
}

async fn insert_event<C: ConnectionTrait>(
    db: &C,
    start_time: &str,
    planned_duration: Option<f64>,
    address: &str,
    zip: &str,
    status: &str,
    details: &str,
) -> Result<event::Model, sea_orm::DbErr> {
    event::ActiveModel {
        start_time: Set(parse_time(start_time)),
        planned_duration: Set(planned_duration.unwrap_or(0.0)),
        address: Set(address.to_string()),
        zip: Set(default_zip(zip)),
        status: Set(default_status(status)),
        details: Set(details.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Upsert the zip lookup row; an existing zip gets its city/state refreshed.
pub(crate) async fn upsert_location<C: ConnectionTrait>(
    db: &C,
    zip: &str,
    city: &str,
    state: &str,
) -> Result<(), sea_orm::DbErr> {
    if zip.trim().is_empty() {
        return Ok(());
    }

    let model = location::ActiveModel {
        zip: Set(zip.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
    };
    Location::insert(model)
        .on_conflict(
            OnConflict::column(location::Column::Zip)
                .update_columns([location::Column::City, location::Column::State])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(())
}

/// Find-or-insert each calendar date, then link it to the event. The link
/// insert ignores conflicts so resubmitted dates are harmless.
async fn link_event_dates<C: ConnectionTrait>(
    db: &C,
    event_id: i32,
    raw_dates: &[String],
) -> Result<(), sea_orm::DbErr> {
    for raw in raw_dates {
        let Some(date) = parse_date(raw) else {
            continue;
        };

        let existing = CalendarDate::find()
            .filter(calendar_date::Column::Date.eq(date))
            .one(db)
            .await?;
        let date_id = match existing {
            Some(row) => row.date_id,
            None => {
                calendar_date::ActiveModel {
                    date: Set(date),
                    ..Default::default()
                }
                .insert(db)
                .await?
                .date_id
            }
        };

        EventDate::insert(event_date::ActiveModel {
            event_id: Set(event_id),
            date_id: Set(date_id),
        })
        .on_conflict(
            OnConflict::columns([event_date::Column::EventId, event_date::Column::DateId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_sort_pending_scheduled_completed_then_rest() {
        let mut statuses = vec!["Completed", "Cancelled", "Pending", "Scheduled"];
        statuses.sort_by_key(|s| status_rank(s));
        assert_eq!(statuses, vec!["Pending", "Scheduled", "Completed", "Cancelled"]);
    }

    #[test]
    fn blank_zip_and_status_get_defaults() {
        assert_eq!(default_zip("  "), "00000");
        assert_eq!(default_zip("84604"), "84604");
        assert_eq!(default_status(""), "Pending");
        assert_eq!(default_status("Scheduled"), "Scheduled");
    }
}
