use crate::errors::AppError;
use crate::models::{
    now_stamp, ExportPayload, Goal, GoalCreate, GoalUpdate, HistoryQuery, ImportPayload,
    ImportSummary, Note, NoteCreate, NoteUpdate, Report, ReportKind, ReportQuery, Routine,
    RoutineCreate, RoutineHistoryResponse, RoutineUpdate, Task, TaskCreate, TaskUpdate,
};
use crate::reports;
use crate::routines::DEFAULT_HISTORY_DAYS;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let open_tasks = data.tasks.values().filter(|task| !task.completed).count();
    let routines_done = data
        .routines
        .values()
        .filter(|routine| routine.active && routine.completed_on(today))
        .count();
    let active_goals = data.goals.values().filter(|goal| !goal.completed).count();
    Html(render_index(today, open_tasks, routines_done, active_goals))
}

pub async fn tasks_list(State(state): State<AppState>) -> Json<Vec<Task>> {
    let data = state.data.lock().await;
    Json(newest_first(data.tasks.values().cloned(), |task| {
        task.created_at.clone()
    }))
}

pub async fn tasks_create(
    State(state): State<AppState>,
    Json(payload): Json<TaskCreate>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    require_text("title", &payload.title)?;
    let task = Task::create(payload);
    let mut data = state.data.lock().await;
    data.tasks.insert(task.id.clone(), task.clone());
    state.store.save(&data).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn tasks_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TaskUpdate>,
) -> Result<Json<Task>, AppError> {
    if let Some(title) = payload.title.as_deref() {
        require_text("title", title)?;
    }
    let mut data = state.data.lock().await;
    let task = data
        .tasks
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found(format!("no task with id {id}")))?;
    task.apply(payload);
    let task = task.clone();
    state.store.save(&data).await?;
    Ok(Json(task))
}

pub async fn tasks_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.tasks.remove(&id).is_none() {
        return Err(AppError::not_found(format!("no task with id {id}")));
    }
    state.store.save(&data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn notes_list(State(state): State<AppState>) -> Json<Vec<Note>> {
    let data = state.data.lock().await;
    Json(newest_first(data.notes.values().cloned(), |note| {
        note.created_at.clone()
    }))
}

pub async fn notes_create(
    State(state): State<AppState>,
    Json(payload): Json<NoteCreate>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    require_text("title", &payload.title)?;
    require_text("content", &payload.content)?;
    let note = Note::create(payload);
    let mut data = state.data.lock().await;
    data.notes.insert(note.id.clone(), note.clone());
    state.store.save(&data).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn notes_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NoteUpdate>,
) -> Result<Json<Note>, AppError> {
    if let Some(title) = payload.title.as_deref() {
        require_text("title", title)?;
    }
    if let Some(content) = payload.content.as_deref() {
        require_text("content", content)?;
    }
    let mut data = state.data.lock().await;
    let note = data
        .notes
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found(format!("no note with id {id}")))?;
    note.apply(payload);
    let note = note.clone();
    state.store.save(&data).await?;
    Ok(Json(note))
}

pub async fn notes_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.notes.remove(&id).is_none() {
        return Err(AppError::not_found(format!("no note with id {id}")));
    }
    state.store.save(&data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn goals_list(State(state): State<AppState>) -> Json<Vec<Goal>> {
    let data = state.data.lock().await;
    Json(newest_first(data.goals.values().cloned(), |goal| {
        goal.created_at.clone()
    }))
}

pub async fn goals_create(
    State(state): State<AppState>,
    Json(payload): Json<GoalCreate>,
) -> Result<(StatusCode, Json<Goal>), AppError> {
    require_text("title", &payload.title)?;
    let goal = Goal::create(payload);
    let mut data = state.data.lock().await;
    data.goals.insert(goal.id.clone(), goal.clone());
    state.store.save(&data).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

pub async fn goals_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GoalUpdate>,
) -> Result<Json<Goal>, AppError> {
    if let Some(title) = payload.title.as_deref() {
        require_text("title", title)?;
    }
    let mut data = state.data.lock().await;
    let goal = data
        .goals
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found(format!("no goal with id {id}")))?;
    goal.apply(payload);
    let goal = goal.clone();
    state.store.save(&data).await?;
    Ok(Json(goal))
}

pub async fn goals_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.goals.remove(&id).is_none() {
        return Err(AppError::not_found(format!("no goal with id {id}")));
    }
    state.store.save(&data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn routines_list(State(state): State<AppState>) -> Json<Vec<Routine>> {
    let data = state.data.lock().await;
    Json(newest_first(data.routines.values().cloned(), |routine| {
        routine.created_at.clone()
    }))
}

pub async fn routines_create(
    State(state): State<AppState>,
    Json(payload): Json<RoutineCreate>,
) -> Result<(StatusCode, Json<Routine>), AppError> {
    require_text("title", &payload.title)?;
    let routine = Routine::create(payload);
    let mut data = state.data.lock().await;
    data.routines.insert(routine.id.clone(), routine.clone());
    state.store.save(&data).await?;
    Ok((StatusCode::CREATED, Json(routine)))
}

pub async fn routines_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RoutineUpdate>,
) -> Result<Json<Routine>, AppError> {
    if let Some(title) = payload.title.as_deref() {
        require_text("title", title)?;
    }
    let mut data = state.data.lock().await;
    let routine = data
        .routines
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found(format!("no routine with id {id}")))?;
    routine.apply(payload);
    let routine = routine.clone();
    state.store.save(&data).await?;
    Ok(Json(routine))
}

pub async fn routines_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.routines.remove(&id).is_none() {
        return Err(AppError::not_found(format!("no routine with id {id}")));
    }
    state.store.save(&data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn routines_toggle(
    State(state): State<AppState>,
    Path((id, date)): Path<(String, NaiveDate)>,
) -> Result<Json<Routine>, AppError> {
    let mut data = state.data.lock().await;
    let routine = data
        .routines
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found(format!("no routine with id {id}")))?;
    routine.toggle_completion(date);
    routine.updated_at = now_stamp();
    let routine = routine.clone();
    state.store.save(&data).await?;
    Ok(Json(routine))
}

pub async fn routines_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<RoutineHistoryResponse>, AppError> {
    let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS).clamp(1, 365);
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let routine = data
        .routines
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("no routine with id {id}")))?;
    Ok(Json(RoutineHistoryResponse {
        routine_id: routine.id.clone(),
        streak: routine.streak(today),
        completion_rate: routine.completion_rate(today, days),
        history: routine.history(today, days),
    }))
}

pub async fn report(
    State(state): State<AppState>,
    Path(kind): Path<ReportKind>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let (tasks, goals) = {
        let data = state.data.lock().await;
        let tasks: Vec<Task> = data.tasks.values().cloned().collect();
        let goals: Vec<Goal> = data.goals.values().cloned().collect();
        (tasks, goals)
    };

    let report = match kind {
        ReportKind::Daily => Report::Daily(reports::daily_report(&tasks)),
        ReportKind::Weekly => Report::Weekly(reports::weekly_report(&tasks, &goals)),
        ReportKind::Monthly => Report::Monthly(reports::monthly_report(&tasks, &goals)),
    };

    match query.format.as_deref() {
        Some("markdown") => {
            let markdown = reports::format_report_as_markdown(&report);
            Ok((
                [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
                markdown,
            )
                .into_response())
        }
        Some(other) => Err(AppError::bad_request(format!(
            "unknown format '{other}', expected 'markdown'"
        ))),
        None => Ok(Json(report).into_response()),
    }
}

pub async fn export_data(State(state): State<AppState>) -> Json<ExportPayload> {
    let data = state.data.lock().await;
    Json(ExportPayload {
        version: data.version.clone(),
        export_date: now_stamp(),
        tasks: data.tasks.values().cloned().collect(),
        notes: data.notes.values().cloned().collect(),
        goals: data.goals.values().cloned().collect(),
        routines: data.routines.values().cloned().collect(),
    })
}

pub async fn import_data(
    State(state): State<AppState>,
    Json(payload): Json<ImportPayload>,
) -> Result<Json<ImportSummary>, AppError> {
    let mut summary = ImportSummary::default();
    let mut data = state.data.lock().await;
    // Each collection present in the payload replaces the stored one.
    if let Some(tasks) = payload.tasks {
        summary.tasks = tasks.len();
        data.tasks = tasks
            .into_iter()
            .map(|task| (task.id.clone(), task))
            .collect();
    }
    if let Some(notes) = payload.notes {
        summary.notes = notes.len();
        data.notes = notes
            .into_iter()
            .map(|note| (note.id.clone(), note))
            .collect();
    }
    if let Some(goals) = payload.goals {
        summary.goals = goals.len();
        data.goals = goals
            .into_iter()
            .map(|mut goal| {
                goal.recalc_progress();
                (goal.id.clone(), goal)
            })
            .collect();
    }
    if let Some(routines) = payload.routines {
        summary.routines = routines.len();
        data.routines = routines
            .into_iter()
            .map(|routine| (routine.id.clone(), routine))
            .collect();
    }
    state.store.save(&data).await?;
    Ok(Json(summary))
}

fn newest_first<T, K>(items: impl Iterator<Item = T>, key: K) -> Vec<T>
where
    K: Fn(&T) -> String,
{
    let mut items: Vec<T> = items.collect();
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(format!("{field} must not be blank")));
    }
    Ok(())
}
