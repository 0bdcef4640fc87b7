pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::generation::handlers as generation;
use crate::planner::handlers as planner;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generators
        .route(
            "/api/v1/system-prompt",
            post(generation::handle_system_prompt),
        )
        .route(
            "/api/v1/system-prompt/copy",
            post(generation::handle_copy_system_prompt),
        )
        .route(
            "/api/v1/system-prompt/download",
            post(generation::handle_download_system_prompt),
        )
        .route("/api/v1/user-prompt", post(generation::handle_user_prompt))
        .route(
            "/api/v1/user-prompt/copy",
            post(generation::handle_copy_user_prompt),
        )
        .route(
            "/api/v1/user-prompt/download",
            post(generation::handle_download_user_prompt),
        )
        // Quick prompt library
        .route(
            "/api/v1/quick-prompts",
            get(catalog::handle_list_quick_prompts),
        )
        .route(
            "/api/v1/quick-prompts/categories",
            get(catalog::handle_prompt_categories),
        )
        .route(
            "/api/v1/quick-prompts/:id",
            get(catalog::handle_get_quick_prompt),
        )
        .route(
            "/api/v1/quick-prompts/:id/markdown",
            get(catalog::handle_quick_prompt_markdown),
        )
        .route(
            "/api/v1/quick-prompts/:id/copy",
            post(catalog::handle_copy_quick_prompt),
        )
        .route(
            "/api/v1/quick-prompts/:id/download",
            post(catalog::handle_download_quick_prompt),
        )
        // Best practices & integration guide
        .route(
            "/api/v1/best-practices",
            get(catalog::handle_list_practices),
        )
        .route(
            "/api/v1/best-practices/:id",
            get(catalog::handle_get_practice),
        )
        .route("/api/v1/techniques", get(catalog::handle_list_techniques))
        .route(
            "/api/v1/anti-patterns",
            get(catalog::handle_list_anti_patterns),
        )
        .route("/api/v1/tools", get(catalog::handle_list_tools))
        .route("/api/v1/tools/:id", get(catalog::handle_get_tool))
        .route(
            "/api/v1/workflow-tips",
            get(catalog::handle_list_workflow_tips),
        )
        .route("/api/v1/routes", get(catalog::handle_list_routes))
        .route(
            "/api/v1/feature-templates",
            get(catalog::handle_feature_templates),
        )
        // Feature planner
        .route("/api/v1/plans", post(planner::handle_create_plan))
        .route(
            "/api/v1/plans/:id",
            get(planner::handle_get_plan).delete(planner::handle_delete_plan),
        )
        .route(
            "/api/v1/plans/:id/project",
            put(planner::handle_set_project),
        )
        .route(
            "/api/v1/plans/:id/features",
            post(planner::handle_add_feature),
        )
        .route(
            "/api/v1/plans/:id/features/from-template",
            post(planner::handle_add_from_template),
        )
        .route(
            "/api/v1/plans/:id/features/:feature_id",
            patch(planner::handle_update_feature).delete(planner::handle_delete_feature),
        )
        .route(
            "/api/v1/plans/:id/features/:feature_id/prompt",
            get(planner::handle_feature_prompt),
        )
        .route(
            "/api/v1/plans/:id/features/:feature_id/copy",
            post(planner::handle_copy_feature_prompt),
        )
        .route("/api/v1/plans/:id/progress", get(planner::handle_progress))
        .route("/api/v1/plans/:id/export", get(planner::handle_export))
        .route(
            "/api/v1/plans/:id/export/download",
            post(planner::handle_export_download),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;
    use crate::export::memory::{Delivery, MemoryExporter};
    use crate::planner::store::PlanStore;

    fn app_with(exporter: Arc<MemoryExporter>) -> Router {
        let state = AppState {
            catalog: Arc::new(Catalog::embedded().unwrap()),
            plans: PlanStore::default(),
            exporter,
        };
        build_router(state)
    }

    fn app() -> Router {
        app_with(Arc::new(MemoryExporter::default()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(json) => request.body(Body::from(json.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "vibekit-api");
    }

    #[tokio::test]
    async fn test_system_prompt_endpoint() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/system-prompt",
            Some(json!({ "experienceLevel": "senior" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("You are a senior software engineer with 7+ years of experience"));
        assert!(prompt.contains("You always implement security best practices"));
    }

    #[tokio::test]
    async fn test_user_prompt_download_uses_fixed_name() {
        let exporter = Arc::new(MemoryExporter::default());
        let app = app_with(exporter.clone());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/user-prompt/download",
            Some(json!({ "projectType": "a blog platform", "techStack": "Next.js" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "delivered": true, "target": "vibe-coding-prompt.txt" }));

        match &exporter.deliveries()[..] {
            [Delivery::File { name, content }] => {
                assert_eq!(name, "vibe-coding-prompt.txt");
                assert!(content.contains("I'm building a blog platform using Next.js."));
            }
            other => panic!("unexpected deliveries: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_copy_is_still_ok() {
        let app = app_with(Arc::new(MemoryExporter::failing()));
        let (status, body) = send(&app, Method::POST, "/api/v1/system-prompt/copy", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "delivered": false, "target": "clipboard" }));
    }

    #[tokio::test]
    async fn test_quick_prompt_filter_endpoint() {
        let (status, body) = send(
            &app(),
            Method::GET,
            "/api/v1/quick-prompts?category=database&complexity=intermediate",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["db-knex-migration", "prisma-schema"]);
    }

    #[tokio::test]
    async fn test_practice_and_tool_search_endpoints() {
        let app = app();
        let ids = |body: &Value| -> Vec<String> {
            body.as_array()
                .unwrap()
                .iter()
                .map(|r| r["id"].as_str().unwrap().to_string())
                .collect()
        };

        let (status, body) = send(&app, Method::GET, "/api/v1/best-practices?q=OWASP", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec!["security-best-practices"]);

        let (status, body) = send(&app, Method::GET, "/api/v1/tools?q=multi-language", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec!["github-copilot"]);
    }

    #[tokio::test]
    async fn test_null_form_option_uses_default_phrase() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/system-prompt",
            Some(json!({ "experienceLevel": null, "codingStyle": 7 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("You are a senior software engineer with 7+ years of experience"));
        assert!(prompt.contains("You strongly prefer functional programming patterns"));
    }

    #[tokio::test]
    async fn test_unknown_selector_is_validation_error() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/tools?difficulty=expert", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_quick_prompt_is_not_found() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/quick-prompts/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_categories_carry_counts() {
        let (_, body) = send(&app(), Method::GET, "/api/v1/quick-prompts/categories", None).await;
        let database = body
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["id"] == "database")
            .unwrap();
        assert_eq!(database["count"], 2);
    }

    #[tokio::test]
    async fn test_markdown_download_file_name() {
        let exporter = Arc::new(MemoryExporter::default());
        let app = app_with(exporter.clone());
        let (_, body) = send(&app, Method::POST, "/api/v1/quick-prompts/prisma-schema/download", None).await;
        assert_eq!(body["target"], "prisma-schema-design-prompt.md");
    }

    #[tokio::test]
    async fn test_routes_available_filter() {
        let (_, body) = send(&app(), Method::GET, "/api/v1/routes?available=false", None).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["integration-guide", "best-practices"]);
    }

    #[tokio::test]
    async fn test_technique_category_filter() {
        let (_, body) = send(&app(), Method::GET, "/api/v1/techniques?category=prompt-crafting", None).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_plan_lifecycle() {
        let exporter = Arc::new(MemoryExporter::default());
        let app = app_with(exporter.clone());

        let (status, plan) = send(
            &app,
            Method::POST,
            "/api/v1/plans",
            Some(json!({ "name": "TaskHub", "techStack": "Rust" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let plan_id = plan["id"].as_str().unwrap().to_string();

        let mut ids = Vec::new();
        for (name, phase) in [("Auth", "foundation"), ("Search", "core"), ("Realtime", "advanced")] {
            let (status, feature) = send(
                &app,
                Method::POST,
                &format!("/api/v1/plans/{plan_id}/features"),
                Some(json!({ "name": name, "description": "d", "phase": phase })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            ids.push(feature["id"].as_str().unwrap().to_string());
        }

        let (status, feature) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/plans/{plan_id}/features/{}", ids[0]),
            Some(json!({ "status": "completed" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(feature["status"], "completed");

        let (_, summary) = send(&app, Method::GET, &format!("/api/v1/plans/{plan_id}/export"), None).await;
        assert_eq!(summary["summary"]["totalFeatures"], 3);
        assert_eq!(summary["summary"]["completedFeatures"], 1);
        assert_eq!(summary["phases"]["foundation"].as_array().unwrap().len(), 1);

        let (_, outcome) = send(
            &app,
            Method::POST,
            &format!("/api/v1/plans/{plan_id}/export/download"),
            None,
        )
        .await;
        assert_eq!(outcome, json!({ "delivered": true, "target": "TaskHub-feature-plan.json" }));

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/v1/plans/{plan_id}/features/{}", ids[1]),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, progress) = send(&app, Method::GET, &format!("/api/v1/plans/{plan_id}/progress"), None).await;
        assert_eq!(progress[0]["phase"], "foundation");
        assert_eq!(progress[0]["percent"], 100.0);
        assert_eq!(progress[1]["total"], 0);
    }

    #[tokio::test]
    async fn test_delete_plan_releases_it() {
        let app = app();
        let (_, plan) = send(&app, Method::POST, "/api/v1/plans", Some(json!({ "name": "Scratch" }))).await;
        let uri = format!("/api/v1/plans/{}", plan["id"].as_str().unwrap());

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_template_feature_prompt() {
        let app = app();
        let (_, plan) = send(&app, Method::POST, "/api/v1/plans", Some(json!({}))).await;
        let plan_id = plan["id"].as_str().unwrap().to_string();

        let catalog = Catalog::embedded().unwrap();
        let template = &catalog.feature_templates.foundation[0];
        let (status, feature) = send(
            &app,
            Method::POST,
            &format!("/api/v1/plans/{plan_id}/features/from-template"),
            Some(json!({ "phase": "foundation", "name": template.name })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let feature_id = feature["id"].as_str().unwrap();

        let (_, body) = send(
            &app,
            Method::GET,
            &format!("/api/v1/plans/{plan_id}/features/{feature_id}/prompt"),
            None,
        )
        .await;
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.starts_with("SITUATION: I'm building a web application using modern web technologies."));
        assert!(prompt.contains(&format!("Create a complete {}", template.name)));
    }

    #[tokio::test]
    async fn test_unknown_template_and_plan() {
        let app = app();
        let (_, plan) = send(&app, Method::POST, "/api/v1/plans", Some(json!({}))).await;
        let plan_id = plan["id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/v1/plans/{plan_id}/features/from-template"),
            Some(json!({ "phase": "core", "name": "No Such Feature" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::GET,
            "/api/v1/plans/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_custom_feature_requires_name() {
        let app = app();
        let (_, plan) = send(&app, Method::POST, "/api/v1/plans", Some(json!({}))).await;
        let plan_id = plan["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/plans/{plan_id}/features"),
            Some(json!({ "description": "no name" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
