use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/tasks", get(handlers::tasks_list).post(handlers::tasks_create))
        .route("/api/tasks/:id", put(handlers::tasks_update).delete(handlers::tasks_delete))
        .route("/api/notes", get(handlers::notes_list).post(handlers::notes_create))
        .route("/api/notes/:id", put(handlers::notes_update).delete(handlers::notes_delete))
        .route("/api/goals", get(handlers::goals_list).post(handlers::goals_create))
        .route("/api/goals/:id", put(handlers::goals_update).delete(handlers::goals_delete))
        .route("/api/routines", get(handlers::routines_list).post(handlers::routines_create))
        .route(
            "/api/routines/:id",
            put(handlers::routines_update).delete(handlers::routines_delete),
        )
        .route("/api/routines/:id/toggle/:date", post(handlers::routines_toggle))
        .route("/api/routines/:id/history", get(handlers::routines_history))
        .route("/api/reports/:kind", get(handlers::report))
        .route("/api/export", get(handlers::export_data))
        .route("/api/import", post(handlers::import_data))
        .with_state(state)
}
