use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;

use super::user::{AuthSession, Credentials};
use crate::{error::AppError, router::AppState};

// This allows us to extract the "next" field from the query string. We use
// this to redirect after log in.
#[derive(Debug, Deserialize)]
pub struct NextUrl {
    next: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(self::post::login))
        .route("/login", get(self::get::login))
        .route("/logout", get(self::get::logout))
        .route("/session-data", get(self::get::session_data))
}

mod post {
    use super::*;

    pub async fn login(
        mut auth_session: AuthSession,
        Form(creds): Form<Credentials>,
    ) -> impl IntoResponse {
        // Failed logins bounce straight back to the form with no message.
        let user = match auth_session.authenticate(creds.clone()).await {
            Ok(Some(user)) => user,
            Ok(None) | Err(_) => return Redirect::to("/login").into_response(),
        };

        if auth_session.login(&user).await.is_err() {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        match creds.next.as_deref() {
            Some(next) if !next.is_empty() => Redirect::to(next).into_response(),
            _ => Redirect::to("/").into_response(),
        }
    }
}

mod get {
    use super::*;

    pub async fn login(
        State(state): State<AppState>,
        Query(NextUrl { next }): Query<NextUrl>,
    ) -> Result<impl IntoResponse, AppError> {
        state.render(
            "login.html",
            minijinja::context! { next => next.unwrap_or_else(|| "/".to_string()) },
        )
    }

    pub async fn logout(mut auth_session: AuthSession) -> impl IntoResponse {
        match auth_session.logout().await {
            Ok(_) => Redirect::to("/").into_response(),
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }

    pub async fn session_data(auth_session: AuthSession) -> impl IntoResponse {
        let user = auth_session
            .user
            .map(|u| json!({ "email": u.email, "job_role": u.job_role }));

        Json(json!({
            "authenticated": user.is_some(),
            "user": user,
        }))
    }
}
