use crate::errors::AppError;
use crate::export::{export_filename, to_csv};
use crate::models::{
    AddCategoryRequest, BudgetData, BudgetView, PeriodOption, RemoveCategoryRequest,
    UpdateFieldRequest,
};
use crate::period::{period_key, period_options, ViewType};
use crate::state::AppState;
use crate::store;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub view: ViewType,
    pub period: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, AppError> {
    let view = query.view;
    let period = query.period.unwrap_or_else(|| current_period(view));
    let budget = ensure_and_view(&state, &period).await?;
    Ok(Html(render_index(view, &budget)))
}

pub async fn get_budget(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<BudgetView>, AppError> {
    let period = query.period.unwrap_or_else(|| current_period(query.view));
    let budget = ensure_and_view(&state, &period).await?;
    Ok(Json(budget))
}

pub async fn get_periods(Query(query): Query<ViewQuery>) -> Json<Vec<PeriodOption>> {
    Json(period_options(Local::now().date_naive(), query.view))
}

pub async fn update_category(
    State(state): State<AppState>,
    Json(payload): Json<UpdateFieldRequest>,
) -> Result<Json<BudgetView>, AppError> {
    let mut data = state.data.lock().await;
    let updated = store::update_field(&data, &payload.period, &payload.id, payload.field, payload.value);
    commit(&state, &mut data, updated).await?;
    Ok(Json(view_of(&payload.period, &data)))
}

pub async fn add_category(
    State(state): State<AppState>,
    Json(payload): Json<AddCategoryRequest>,
) -> Result<Json<BudgetView>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("category name must not be empty"));
    }

    let mut data = state.data.lock().await;
    let updated = store::add_custom_category(&data, &payload.period, payload.kind, name);
    commit(&state, &mut data, updated).await?;
    Ok(Json(view_of(&payload.period, &data)))
}

pub async fn remove_category(
    State(state): State<AppState>,
    Json(payload): Json<RemoveCategoryRequest>,
) -> Result<Json<BudgetView>, AppError> {
    let mut data = state.data.lock().await;
    let updated = store::remove_category(&data, &payload.period, &payload.id);
    commit(&state, &mut data, updated).await?;
    Ok(Json(view_of(&payload.period, &data)))
}

pub async fn export_csv(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let data = state.data.lock().await;
    let csv = to_csv(&data);
    let filename = export_filename(query.view, Local::now().date_naive());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}

/// Seeds the period if it is new, persisting only when something changed,
/// and returns its current view.
async fn ensure_and_view(state: &AppState, period: &str) -> Result<BudgetView, AppError> {
    let mut data = state.data.lock().await;
    let ensured = store::ensure_period(&data, period);
    commit(state, &mut data, ensured).await?;
    Ok(view_of(period, &data))
}

/// Commits a store transition: adopt the new value and write it through
/// only when it differs from the current one, so no-op mutations never
/// touch disk.
async fn commit(
    state: &AppState,
    data: &mut BudgetData,
    updated: BudgetData,
) -> Result<(), AppError> {
    if updated != *data {
        *data = updated;
        persist_data(&state.data_path, data).await?;
    }
    Ok(())
}

fn view_of(period: &str, data: &BudgetData) -> BudgetView {
    let period_data = data.periods.get(period).cloned().unwrap_or_default();
    let summary = store::summarize(&period_data);
    BudgetView {
        period: period.to_string(),
        income: period_data.income,
        expenses: period_data.expenses,
        summary,
    }
}

fn current_period(view: ViewType) -> String {
    period_key(Local::now().date_naive(), view)
}
