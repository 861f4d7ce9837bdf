use crate::{
    auth::{router as auth_router, user::Backend},
    error::AppError,
    routes::{
        api::{get_city_state, submit_discovery_method},
        events::{
            add_distribution_event, add_service_event, delete_date, delete_event, edit_event,
            event_detail, list_events,
        },
        home::{home, stats},
        pages::{contact, discovery_method, host_an_event},
        volunteers::{
            delete_volunteer, edit_volunteer, list_volunteers, new_volunteer, volunteer_request,
        },
    },
    util::asset_loader::AssetLoader,
};
use axum::{
    Router,
    response::Html,
    routing::{get, get_service, post},
};
use axum_login::{
    AuthManagerLayerBuilder,
    tower_sessions::{
        Expiry, SessionManagerLayer,
        cookie::{SameSite, time},
    },
};
use minijinja::Environment;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::{signal, task::AbortHandle};
use tower_http::services::ServeDir;
use tower_sessions_sqlx_store::PostgresStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn render(
        &self,
        name: &str,
        ctx: minijinja::Value,
    ) -> Result<Html<String>, AppError> {
        let tmpl = self.templates.get_template(name)?;
        Ok(Html(tmpl.render(ctx)?))
    }
}

pub async fn create_router(
    db: DatabaseConnection,
    session_store: PostgresStore,
) -> anyhow::Result<Router> {
    let templates = setup_templates().await;

    let state = AppState {
        db: db.clone(),
        templates: Arc::new(templates),
    };

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(1)));

    // Auth service.
    //
    // This combines the session layer with our backend to establish the auth
    // service which will provide the auth session as a request extension.
    let backend = Backend::new(db);
    let auth_layer = AuthManagerLayerBuilder::new(backend, session_layer).build();

    let app = Router::new()
        .route("/", get(home))
        .route("/stats", get(stats))
        .route("/contact", get(contact))
        .route("/hostAnEvent", get(host_an_event))
        .route("/discoveryMethod", get(discovery_method))
        .route("/events", get(list_events))
        .route("/events/{event_id}", get(event_detail))
        .route("/addServiceEvent", post(add_service_event))
        .route("/addDistributionEvent", post(add_distribution_event))
        .route("/editEvent", post(edit_event))
        .route("/deleteEvent", post(delete_event))
        .route("/deleteDate", post(delete_date))
        .route("/volunteers", get(list_volunteers))
        .route("/volunteerRequest", get(volunteer_request))
        .route("/newVolunteer", post(new_volunteer))
        .route("/editVolunteer", post(edit_volunteer))
        .route("/deleteVolunteer", post(delete_volunteer))
        .route("/getCityState", get(get_city_state))
        .route("/submitDiscoveryMethod", post(submit_discovery_method))
        .merge(auth_router::router())
        .with_state(state)
        .nest_service("/static", get_service(ServeDir::new("static")))
        .layer(auth_layer);
    Ok(app)
}

async fn setup_templates() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader("templates"));
    let asset_loader = AssetLoader::new();
    asset_loader.register(&mut env);
    env
}

pub async fn shutdown_signal(deletion_task_abort_handle: AbortHandle) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { deletion_task_abort_handle.abort() },
        _ = terminate => { deletion_task_abort_handle.abort() },
    }
}
