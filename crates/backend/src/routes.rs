use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use contracts::domain::{
    a001_player::Player, a002_group::Group, a003_training_session::TrainingSession,
    a004_match::Match, a005_assessment::Assessment, a006_drill::Drill, a007_fee::Fee,
    a008_medical_record::MedicalRecord, a009_trial::Trial, a010_announcement::Announcement,
    a011_event::Event,
};
use contracts::shared::record::{EditableRecord, Filterable, Summarize};
use contracts::system::navigation::View;
use serde::{de::DeserializeOwned, Serialize};

use crate::handlers::{self, records};
use crate::shared::state::{AppState, StoredRecord};
use crate::system::auth::middleware::{require_auth, require_view};
use crate::system::handlers as system_handlers;

/// Builds the whole API.
///
/// Every route except `/health` and login needs a bearer token; record pages
/// additionally check the caller's role against the page's allow-list.
pub fn configure_routes(state: AppState) -> Router {
    let protected = Router::new()
        // System: session and sidebar
        .route("/api/system/auth/me", get(system_handlers::auth::current_user))
        .route("/api/system/auth/logout", post(system_handlers::auth::logout))
        .route("/api/system/navigation", get(system_handlers::navigation::menu))
        // Dashboard
        .nest(
            "/api/dashboard",
            gated(
                View::Dashboard,
                Router::new().route("/", get(handlers::d400_role_dashboard::get_dashboard)),
            ),
        )
        // Record pages
        .nest(
            "/api/players",
            gated(View::Players, with_summary::<Player>(filtered_pages::<Player>())),
        )
        .nest(
            "/api/groups",
            gated(View::Groups, with_summary::<Group>(filtered_pages::<Group>())),
        )
        .nest(
            "/api/training",
            gated(
                View::Training,
                with_summary::<TrainingSession>(filtered_pages::<TrainingSession>()),
            ),
        )
        .nest(
            "/api/matches",
            gated(
                View::Matches,
                with_summary::<Match>(filtered_pages::<Match>())
                    .route("/:id/kick-off", post(handlers::a004_match::kick_off))
                    .route("/:id/result", post(handlers::a004_match::record_result)),
            ),
        )
        .nest(
            "/api/assessments",
            gated(
                View::Assessments,
                with_summary::<Assessment>(
                    Router::new().route(
                        "/",
                        get(records::list_unfiltered::<Assessment>).post(records::save::<Assessment>),
                    ),
                )
                .merge(record_routes::<Assessment>()),
            ),
        )
        .nest("/api/drills", gated(View::Drills, filtered_pages::<Drill>()))
        .nest(
            "/api/fees",
            gated(
                View::Fees,
                with_summary::<Fee>(filtered_pages::<Fee>())
                    .route("/:id/pay", post(handlers::a007_fee::record_payment))
                    .route("/:id/remind", post(handlers::a007_fee::send_reminder)),
            ),
        )
        .nest(
            "/api/medical",
            gated(
                View::Medical,
                with_summary::<MedicalRecord>(filtered_pages::<MedicalRecord>()),
            ),
        )
        .nest(
            "/api/scouting",
            gated(
                View::Scouting,
                with_summary::<Trial>(filtered_pages::<Trial>())
                    .route("/:id/complete", post(handlers::a009_trial::complete))
                    .route("/:id/decide", post(handlers::a009_trial::decide)),
            ),
        )
        .nest(
            "/api/announcements",
            gated(
                View::Announcements,
                filtered_pages::<Announcement>()
                    .route("/:id/publish", post(handlers::a010_announcement::publish)),
            ),
        )
        .nest(
            "/api/events",
            gated(
                View::Events,
                with_summary::<Event>(filtered_pages::<Event>())
                    .route("/:id/cancel", post(handlers::a011_event::cancel)),
            ),
        )
        // Reports
        .nest(
            "/api/reports",
            gated(
                View::Reports,
                Router::new()
                    .route("/", get(handlers::reports::list_reports))
                    .route("/tabs", get(handlers::reports::report_tabs))
                    .route("/:id/export", get(handlers::reports::export_report)),
            ),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/system/auth/login", post(system_handlers::auth::login))
        .merge(protected)
        .with_state(state)
}

/// Admits only the roles allowed to open `view`
fn gated(view: View, router: Router<AppState>) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(view, require_view))
}

/// get/delete of one record and its edit form
fn record_routes<R>() -> Router<AppState>
where
    R: StoredRecord + EditableRecord + Serialize,
    R::Form: Serialize + DeserializeOwned + Send + 'static,
{
    Router::new()
        .route("/:id", get(records::get_by_id::<R>).delete(records::delete::<R>))
        .route("/:id/form", get(records::form::<R>))
}

/// List with filter tabs, save, and the per-record routes
fn filtered_pages<R>() -> Router<AppState>
where
    R: StoredRecord + EditableRecord + Filterable + Serialize,
    R::Form: Serialize + DeserializeOwned + Send + 'static,
{
    Router::new()
        .route("/", get(records::list_all::<R>).post(records::save::<R>))
        .route("/tabs", get(records::tabs::<R>))
        .merge(record_routes::<R>())
}

fn with_summary<R>(router: Router<AppState>) -> Router<AppState>
where
    R: StoredRecord + Summarize,
{
    router.route("/summary", get(records::summary::<R>))
}
