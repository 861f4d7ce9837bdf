use axum::{extract::State, response::IntoResponse};
use minijinja::context;
use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entities::{calendar_date, prelude::*},
    error::AppError,
    router::AppState,
};

pub async fn contact(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.render("contact.html", context! {})
}

pub async fn host_an_event(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service_types = ServiceType::find().all(&state.db).await?;
    let dates = CalendarDate::find()
        .order_by_asc(calendar_date::Column::Date)
        .all(&state.db)
        .await?;

    state.render(
        "host_an_event.html",
        context! { service_types => service_types, dates => dates },
    )
}

pub async fn discovery_method(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let methods = Survey::find().all(&state.db).await?;

    state.render("discovery_method.html", context! { methods => methods })
}
