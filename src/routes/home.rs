use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use minijinja::context;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QuerySelect,
};
use serde::Serialize;

use crate::{
    auth::user::AuthSession,
    entities::{event, event_outcome, prelude::*, recipient},
    error::AppError,
    router::AppState,
};

/// Item ids above this are finished vests rather than supplies.
const VEST_ITEM_THRESHOLD: i32 = 13;

#[derive(Debug, FromQueryResult, Serialize)]
struct OutcomeTotals {
    event_count: i64,
    total_headcount: Option<i64>,
    total_service_hours: Option<f64>,
}

#[derive(Debug, FromQueryResult, Serialize)]
struct StatusCount {
    status: String,
    count: i64,
}

#[derive(Debug, Serialize)]
struct Stats {
    totals: OutcomeTotals,
    vests_distributed: u64,
    status_counts: Vec<StatusCount>,
}

async fn gather_stats(db: &sea_orm::DatabaseConnection) -> Result<Stats, AppError> {
    let totals = EventOutcome::find()
        .select_only()
        .column_as(event_outcome::Column::EventId.count(), "event_count")
        .column_as(event_outcome::Column::Headcount.sum(), "total_headcount")
        .column_as(
            event_outcome::Column::ServiceHours.sum(),
            "total_service_hours",
        )
        .into_model::<OutcomeTotals>()
        .one(db)
        .await?
        .unwrap_or(OutcomeTotals {
            event_count: 0,
            total_headcount: None,
            total_service_hours: None,
        });

    // Each vest handed out is one recipient row with a vest item id.
    let vests_distributed = Recipient::find()
        .filter(recipient::Column::ItemId.gt(VEST_ITEM_THRESHOLD))
        .count(db)
        .await?;

    let status_counts = Event::find()
        .select_only()
        .column(event::Column::Status)
        .column_as(event::Column::EventId.count(), "count")
        .group_by(event::Column::Status)
        .into_model::<StatusCount>()
        .all(db)
        .await?;

    Ok(Stats {
        totals,
        vests_distributed,
        status_counts,
    })
}

pub async fn home(
    State(state): State<AppState>,
    auth_session: AuthSession,
) -> Result<Response, AppError> {
    let stats = gather_stats(&state.db).await?;

    Ok(state
        .render(
            "home.html",
            context! {
                stats => stats,
                authenticated => auth_session.user.is_some(),
            },
        )?
        .into_response())
}

pub async fn stats(
    State(state): State<AppState>,
    auth_session: AuthSession,
) -> Result<Response, AppError> {
    if auth_session.user.is_none() {
        return Ok(Redirect::to("/login?next=/stats").into_response());
    }

    let stats = gather_stats(&state.db).await?;

    Ok(state
        .render("stats.html", context! { stats => stats })?
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vest_threshold_splits_supplies_from_vests() {
        // Seeded supply items run 1 through 5; finished vests are 14 to 16.
        for supply_id in [1, 5, VEST_ITEM_THRESHOLD] {
            assert!(supply_id <= VEST_ITEM_THRESHOLD);
        }
        for vest_id in [14, 15, 16] {
            assert!(vest_id > VEST_ITEM_THRESHOLD);
        }
    }
}
