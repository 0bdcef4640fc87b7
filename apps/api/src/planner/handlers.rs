//! Axum route handlers for the feature planner.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{self, markdown::plan_file_name, ExportOutcome};
use crate::generation::handlers::PromptResponse;
use crate::models::feature::{Feature, FeatureStatus, NewFeature, Phase, Project, ProjectSummary};
use crate::planner::plan::{FeaturePlan, PhaseProgress};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub id: Uuid,
    pub project: Project,
    pub features: Vec<Feature>,
}

impl PlanResponse {
    fn new(id: Uuid, plan: &FeaturePlan) -> Self {
        Self {
            id,
            project: plan.project().clone(),
            features: plan.features().to_vec(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FromTemplateRequest {
    pub phase: Phase,
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeatureUpdate {
    pub status: Option<FeatureStatus>,
    pub notes: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/plans
pub async fn handle_create_plan(
    State(state): State<AppState>,
    Json(project): Json<Project>,
) -> Result<(StatusCode, Json<PlanResponse>), AppError> {
    let id = state.plans.create(project).await;
    let plan = state.plans.read(id, |p| PlanResponse::new(id, p)).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/plans/:id
pub async fn handle_get_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = state.plans.read(id, |p| PlanResponse::new(id, p)).await?;
    Ok(Json(plan))
}

/// DELETE /api/v1/plans/:id
pub async fn handle_delete_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.plans.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/plans/:id/project
pub async fn handle_set_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(project): Json<Project>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = state
        .plans
        .update(id, |p| {
            p.set_project(project);
            Ok(PlanResponse::new(id, p))
        })
        .await?;
    Ok(Json(plan))
}

/// POST /api/v1/plans/:id/features
pub async fn handle_add_feature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(new): Json<NewFeature>,
) -> Result<(StatusCode, Json<Feature>), AppError> {
    let feature = state
        .plans
        .update(id, |p| p.add_custom(new).cloned())
        .await?;
    tracing::info!(plan = %id, feature = %feature.id, "Added custom feature '{}'", feature.name);
    Ok((StatusCode::CREATED, Json(feature)))
}

/// POST /api/v1/plans/:id/features/from-template
///
/// Copies a built-in template into the plan under the requested phase.
pub async fn handle_add_from_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FromTemplateRequest>,
) -> Result<(StatusCode, Json<Feature>), AppError> {
    let template = state
        .catalog
        .feature_template(request.phase, &request.name)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No {} template named '{}'",
                request.phase, request.name
            ))
        })?;

    let feature = state
        .plans
        .update(id, |p| Ok(p.add_from_template(template, request.phase).clone()))
        .await?;
    tracing::info!(plan = %id, feature = %feature.id, "Added '{}' from template", feature.name);
    Ok((StatusCode::CREATED, Json(feature)))
}

/// PATCH /api/v1/plans/:id/features/:feature_id
pub async fn handle_update_feature(
    State(state): State<AppState>,
    Path((id, feature_id)): Path<(Uuid, String)>,
    Json(update): Json<FeatureUpdate>,
) -> Result<Json<Feature>, AppError> {
    if update.status.is_none() && update.notes.is_none() {
        return Err(AppError::Validation(
            "Provide at least one of status or notes".to_string(),
        ));
    }

    let feature = state
        .plans
        .update(id, |p| {
            if let Some(status) = update.status {
                p.update_status(&feature_id, status)?;
            }
            if let Some(notes) = update.notes {
                p.update_notes(&feature_id, notes)?;
            }
            p.feature(&feature_id).cloned()
        })
        .await?;
    Ok(Json(feature))
}

/// DELETE /api/v1/plans/:id/features/:feature_id
pub async fn handle_delete_feature(
    State(state): State<AppState>,
    Path((id, feature_id)): Path<(Uuid, String)>,
) -> Result<StatusCode, AppError> {
    state.plans.update(id, |p| p.delete(&feature_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/plans/:id/features/:feature_id/prompt
pub async fn handle_feature_prompt(
    State(state): State<AppState>,
    Path((id, feature_id)): Path<(Uuid, String)>,
) -> Result<Json<PromptResponse>, AppError> {
    let prompt = state
        .plans
        .read(id, |p| p.feature_prompt(&feature_id))
        .await??;
    Ok(Json(PromptResponse { prompt }))
}

/// POST /api/v1/plans/:id/features/:feature_id/copy
pub async fn handle_copy_feature_prompt(
    State(state): State<AppState>,
    Path((id, feature_id)): Path<(Uuid, String)>,
) -> Result<Json<ExportOutcome>, AppError> {
    let prompt = state
        .plans
        .read(id, |p| p.feature_prompt(&feature_id))
        .await??;
    Ok(Json(export::copy(state.exporter.as_ref(), &prompt).await))
}

/// GET /api/v1/plans/:id/progress
pub async fn handle_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<PhaseProgress>>, AppError> {
    let progress = state.plans.read(id, FeaturePlan::progress).await?;
    Ok(Json(progress))
}

/// GET /api/v1/plans/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectSummary>, AppError> {
    let summary = state.plans.read(id, FeaturePlan::summary).await?;
    Ok(Json(summary))
}

/// POST /api/v1/plans/:id/export/download
///
/// Saves the pretty-printed plan as `<project name>-feature-plan.json`.
pub async fn handle_export_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportOutcome>, AppError> {
    let summary = state.plans.read(id, FeaturePlan::summary).await?;
    let content = serde_json::to_string_pretty(&summary)?;
    let name = plan_file_name(&summary.project.name);
    Ok(Json(export::save(state.exporter.as_ref(), &name, &content).await))
}
