use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, sea_query::Expr};
use serde::Deserialize;
use serde_json::json;

use crate::{
    entities::{prelude::*, survey},
    error::AppError,
    router::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ZipQuery {
    pub zip: String,
}

#[derive(Debug, Deserialize)]
pub struct DiscoveryMethodForm {
    pub discovery_method: String,
}

/// Zip lookup used to prefill city/state on the event and volunteer forms.
pub async fn get_city_state(
    State(state): State<AppState>,
    Query(query): Query<ZipQuery>,
) -> Result<Response, AppError> {
    match Location::find_by_id(query.zip.trim()).one(&state.db).await? {
        Some(location) => Ok(Json(json!({
            "places": [{ "city": location.city, "state": location.state }],
        }))
        .into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Location not found" })),
        )
            .into_response()),
    }
}

pub async fn submit_discovery_method(
    State(state): State<AppState>,
    Form(form): Form<DiscoveryMethodForm>,
) -> Result<Redirect, AppError> {
    let result = Survey::update_many()
        .col_expr(
            survey::Column::Total,
            Expr::col(survey::Column::Total).add(1),
        )
        .filter(survey::Column::DiscoveryMethod.eq(&form.discovery_method))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Discovery method not found.".to_string()));
    }

    Ok(Redirect::to("/"))
}
