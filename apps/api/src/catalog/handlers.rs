//! Axum route handlers for the read-only catalogs.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::filter::{filter_records, FilterState, Selector};
use crate::errors::AppError;
use crate::export::{self, markdown, ExportOutcome};
use crate::models::catalog::{
    AntiPattern, BestPractice, IntegrationTool, PracticeCategory, PracticeDifficulty,
    PromptCategory, PromptCategoryInfo, QuickPrompt, SkillTier, Technique, TechniqueCategory,
    TipCategory, ToolCategory, ToolRoute, WorkflowTip,
};
use crate::models::feature::PhaseTemplates;
use crate::models::keyed::Keyed;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Query / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Selector and search parameters shared by the filterable listings.
/// Each listing reads only the parameters it supports.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub complexity: Option<String>,
    pub difficulty: Option<String>,
    pub q: Option<String>,
}

impl CatalogQuery {
    fn query(&self) -> String {
        self.q.clone().unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    pub available: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    #[serde(flatten)]
    pub category: PromptCategoryInfo,
    pub count: usize,
}

fn selector<T: Keyed>(param: &str, raw: Option<&str>) -> Result<Selector<T>, AppError> {
    Selector::parse(raw).map_err(|e| AppError::Validation(format!("{param}: {e}")))
}

fn not_found(kind: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{kind} '{id}' not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Quick prompts
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quick-prompts?category=&complexity=&q=
pub async fn handle_list_quick_prompts(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<Vec<QuickPrompt>>, AppError> {
    let filter: FilterState<PromptCategory, SkillTier> = FilterState::new(
        selector("category", params.category.as_deref())?,
        selector("complexity", params.complexity.as_deref())?,
        params.query(),
    );
    let prompts = filter_records(&state.catalog.quick_prompts, &filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(prompts))
}

/// GET /api/v1/quick-prompts/categories
///
/// Category metadata with the number of prompts currently in each.
pub async fn handle_prompt_categories(State(state): State<AppState>) -> Json<Vec<CategoryCount>> {
    let counts = state
        .catalog
        .prompt_categories
        .iter()
        .map(|c| CategoryCount {
            category: c.clone(),
            count: state.catalog.prompt_count(c.id),
        })
        .collect();
    Json(counts)
}

/// GET /api/v1/quick-prompts/:id
pub async fn handle_get_quick_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuickPrompt>, AppError> {
    let prompt = state
        .catalog
        .quick_prompt(&id)
        .ok_or_else(|| not_found("Quick prompt", &id))?;
    Ok(Json(prompt.clone()))
}

/// GET /api/v1/quick-prompts/:id/markdown
pub async fn handle_quick_prompt_markdown(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let prompt = state
        .catalog
        .quick_prompt(&id)
        .ok_or_else(|| not_found("Quick prompt", &id))?;
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown::quick_prompt_markdown(prompt),
    ))
}

/// POST /api/v1/quick-prompts/:id/copy
///
/// Copies the raw prompt body, not the Markdown document.
pub async fn handle_copy_quick_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExportOutcome>, AppError> {
    let prompt = state
        .catalog
        .quick_prompt(&id)
        .ok_or_else(|| not_found("Quick prompt", &id))?;
    Ok(Json(export::copy(state.exporter.as_ref(), &prompt.prompt).await))
}

/// POST /api/v1/quick-prompts/:id/download
pub async fn handle_download_quick_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExportOutcome>, AppError> {
    let prompt = state
        .catalog
        .quick_prompt(&id)
        .ok_or_else(|| not_found("Quick prompt", &id))?;
    let name = markdown::quick_prompt_file_name(&prompt.title);
    let content = markdown::quick_prompt_markdown(prompt);
    Ok(Json(export::save(state.exporter.as_ref(), &name, &content).await))
}

// ────────────────────────────────────────────────────────────────────────────
// Best practices
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/best-practices?category=&difficulty=&q=
pub async fn handle_list_practices(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<Vec<BestPractice>>, AppError> {
    let filter: FilterState<PracticeCategory, PracticeDifficulty> = FilterState::new(
        selector("category", params.category.as_deref())?,
        selector("difficulty", params.difficulty.as_deref())?,
        params.query(),
    );
    let practices = filter_records(&state.catalog.best_practices, &filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(practices))
}

/// GET /api/v1/best-practices/:id
pub async fn handle_get_practice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BestPractice>, AppError> {
    let practice = state
        .catalog
        .best_practice(&id)
        .ok_or_else(|| not_found("Best practice", &id))?;
    Ok(Json(practice.clone()))
}

/// GET /api/v1/techniques?category=
pub async fn handle_list_techniques(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<Vec<Technique>>, AppError> {
    let category: Selector<TechniqueCategory> = selector("category", params.category.as_deref())?;
    let techniques = state
        .catalog
        .techniques
        .iter()
        .filter(|t| category.admits(t.category))
        .cloned()
        .collect();
    Ok(Json(techniques))
}

/// GET /api/v1/anti-patterns
pub async fn handle_list_anti_patterns(State(state): State<AppState>) -> Json<Vec<AntiPattern>> {
    Json(state.catalog.anti_patterns.clone())
}

// ────────────────────────────────────────────────────────────────────────────
// Integration guide
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/tools?category=&difficulty=&q=
pub async fn handle_list_tools(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<Vec<IntegrationTool>>, AppError> {
    let filter: FilterState<ToolCategory, SkillTier> = FilterState::new(
        selector("category", params.category.as_deref())?,
        selector("difficulty", params.difficulty.as_deref())?,
        params.query(),
    );
    let tools = filter_records(&state.catalog.tools, &filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(tools))
}

/// GET /api/v1/tools/:id
pub async fn handle_get_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IntegrationTool>, AppError> {
    let tool = state
        .catalog
        .tool(&id)
        .ok_or_else(|| not_found("Tool", &id))?;
    Ok(Json(tool.clone()))
}

/// GET /api/v1/workflow-tips?category=
pub async fn handle_list_workflow_tips(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<Vec<WorkflowTip>>, AppError> {
    let category: Selector<TipCategory> = selector("category", params.category.as_deref())?;
    let tips = state
        .catalog
        .workflow_tips
        .iter()
        .filter(|t| category.admits(t.category))
        .cloned()
        .collect();
    Ok(Json(tips))
}

// ────────────────────────────────────────────────────────────────────────────
// Landing page & feature templates
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/routes?available=
pub async fn handle_list_routes(
    State(state): State<AppState>,
    Query(params): Query<RouteQuery>,
) -> Json<Vec<ToolRoute>> {
    let routes = state
        .catalog
        .routes
        .iter()
        .filter(|r| params.available.map_or(true, |a| r.is_available == a))
        .cloned()
        .collect();
    Json(routes)
}

/// GET /api/v1/feature-templates
pub async fn handle_feature_templates(State(state): State<AppState>) -> Json<PhaseTemplates> {
    Json(state.catalog.feature_templates.clone())
}
