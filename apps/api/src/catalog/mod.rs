//! Static catalogs, loaded once at startup and shared read-only.
//!
//! The JSON files under `catalog/data/` are compiled into the binary. Setting
//! `CATALOG_DIR` swaps any of them for an on-disk copy with the same file name.

pub mod filter;
pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::models::catalog::{
    AntiPattern, BestPractice, IntegrationTool, PromptCategory, PromptCategoryInfo, QuickPrompt,
    Technique, ToolRoute, WorkflowTip,
};
use crate::models::feature::{FeatureTemplate, Phase, PhaseTemplates};

const QUICK_PROMPTS: (&str, &str) = ("quick_prompts.json", include_str!("data/quick_prompts.json"));
const PROMPT_CATEGORIES: (&str, &str) = (
    "prompt_categories.json",
    include_str!("data/prompt_categories.json"),
);
const BEST_PRACTICES: (&str, &str) = ("best_practices.json", include_str!("data/best_practices.json"));
const TECHNIQUES: (&str, &str) = ("techniques.json", include_str!("data/techniques.json"));
const ANTI_PATTERNS: (&str, &str) = ("anti_patterns.json", include_str!("data/anti_patterns.json"));
const INTEGRATION_TOOLS: (&str, &str) = (
    "integration_tools.json",
    include_str!("data/integration_tools.json"),
);
const WORKFLOW_TIPS: (&str, &str) = ("workflow_tips.json", include_str!("data/workflow_tips.json"));
const TOOL_ROUTES: (&str, &str) = ("tool_routes.json", include_str!("data/tool_routes.json"));
const FEATURE_TEMPLATES: (&str, &str) = (
    "feature_templates.json",
    include_str!("data/feature_templates.json"),
);

/// Every static table the service serves.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub quick_prompts: Vec<QuickPrompt>,
    pub prompt_categories: Vec<PromptCategoryInfo>,
    pub best_practices: Vec<BestPractice>,
    pub techniques: Vec<Technique>,
    pub anti_patterns: Vec<AntiPattern>,
    pub tools: Vec<IntegrationTool>,
    pub workflow_tips: Vec<WorkflowTip>,
    pub routes: Vec<ToolRoute>,
    pub feature_templates: PhaseTemplates,
}

impl Catalog {
    /// Loads the catalog, reading overrides from `dir` when given.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let catalog = Catalog {
            quick_prompts: parse(dir, QUICK_PROMPTS)?,
            prompt_categories: parse(dir, PROMPT_CATEGORIES)?,
            best_practices: parse(dir, BEST_PRACTICES)?,
            techniques: parse(dir, TECHNIQUES)?,
            anti_patterns: parse(dir, ANTI_PATTERNS)?,
            tools: parse(dir, INTEGRATION_TOOLS)?,
            workflow_tips: parse(dir, WORKFLOW_TIPS)?,
            routes: parse(dir, TOOL_ROUTES)?,
            feature_templates: parse(dir, FEATURE_TEMPLATES)?,
        };
        catalog.validate()?;

        info!(
            quick_prompts = catalog.quick_prompts.len(),
            best_practices = catalog.best_practices.len(),
            tools = catalog.tools.len(),
            feature_templates = catalog.feature_templates.iter().count(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// The compiled-in catalog with no overrides.
    #[cfg(test)]
    pub fn embedded() -> Result<Self> {
        Self::load(None)
    }

    fn validate(&self) -> Result<()> {
        ensure_unique("quick prompt", self.quick_prompts.iter().map(|p| p.id.as_str()))?;
        ensure_unique(
            "prompt category",
            self.prompt_categories.iter().map(|c| c.id.to_string()),
        )?;
        ensure_unique("best practice", self.best_practices.iter().map(|p| p.id.as_str()))?;
        ensure_unique("technique", self.techniques.iter().map(|t| t.id.as_str()))?;
        ensure_unique("anti-pattern", self.anti_patterns.iter().map(|a| a.id.as_str()))?;
        ensure_unique("integration tool", self.tools.iter().map(|t| t.id.as_str()))?;
        ensure_unique("workflow tip", self.workflow_tips.iter().map(|t| t.id.as_str()))?;
        ensure_unique("route", self.routes.iter().map(|r| r.id.as_str()))?;
        // Dependencies reference templates by display name, so names must be unique too.
        ensure_unique(
            "feature template",
            self.feature_templates.iter().map(|(_, t)| t.name.as_str()),
        )?;
        Ok(())
    }

    pub fn quick_prompt(&self, id: &str) -> Option<&QuickPrompt> {
        self.quick_prompts.iter().find(|p| p.id == id)
    }

    pub fn best_practice(&self, id: &str) -> Option<&BestPractice> {
        self.best_practices.iter().find(|p| p.id == id)
    }

    pub fn tool(&self, id: &str) -> Option<&IntegrationTool> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn feature_template(&self, phase: Phase, name: &str) -> Option<&FeatureTemplate> {
        self.feature_templates
            .for_phase(phase)
            .iter()
            .find(|t| t.name == name)
    }

    /// Number of quick prompts in `category`.
    pub fn prompt_count(&self, category: PromptCategory) -> usize {
        self.quick_prompts
            .iter()
            .filter(|p| p.category == category)
            .count()
    }
}

fn parse<T: DeserializeOwned>(dir: Option<&Path>, (file_name, embedded): (&str, &str)) -> Result<T> {
    let raw = match dir {
        Some(dir) if dir.join(file_name).is_file() => {
            let path = dir.join(file_name);
            debug!("Reading catalog override {}", path.display());
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read catalog file {}", path.display()))?
        }
        _ => embedded.to_string(),
    };

    serde_json::from_str(&raw).with_context(|| format!("Invalid catalog file '{file_name}'"))
}

fn ensure_unique<I, S>(kind: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        let id = id.as_ref();
        if !seen.insert(id.to_string()) {
            bail!("Duplicate {kind} id '{id}' in catalog");
        }
    }
    Ok(())
}
