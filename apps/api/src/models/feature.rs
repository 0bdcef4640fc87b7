use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::keyed::impl_keyed;

/// Build phase a feature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Foundation,
    Core,
    Advanced,
}

impl_keyed!(Phase {
    Foundation => "foundation",
    Core => "core",
    Advanced => "advanced",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureStatus {
    #[default]
    Pending,
    #[serde(rename = "in_progress")]
    InProgress,
    Completed,
    Blocked,
}

impl_keyed!(FeatureStatus {
    Pending => "pending",
    InProgress => "in_progress",
    Completed => "completed",
    Blocked => "blocked",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureComplexity {
    Low,
    #[default]
    Medium,
    High,
}

impl_keyed!(FeatureComplexity {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Ambient project context injected into every feature prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub tech_stack: String,
    pub architecture: String,
    pub description: String,
}

/// A reusable feature blueprint from the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTemplate {
    pub name: String,
    pub description: String,
    pub complexity: FeatureComplexity,
    pub estimated_prompts: u32,
    /// Display names of other features, matched by string equality.
    pub dependencies: Vec<String>,
    pub components: Vec<String>,
}

/// Built-in templates grouped by phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhaseTemplates {
    pub foundation: Vec<FeatureTemplate>,
    pub core: Vec<FeatureTemplate>,
    pub advanced: Vec<FeatureTemplate>,
}

impl PhaseTemplates {
    pub fn for_phase(&self, phase: Phase) -> &[FeatureTemplate] {
        match phase {
            Phase::Foundation => &self.foundation,
            Phase::Core => &self.core,
            Phase::Advanced => &self.advanced,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Phase, &FeatureTemplate)> {
        self.foundation
            .iter()
            .map(|t| (Phase::Foundation, t))
            .chain(self.core.iter().map(|t| (Phase::Core, t)))
            .chain(self.advanced.iter().map(|t| (Phase::Advanced, t)))
    }
}

/// A feature tracked inside a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub description: String,
    pub complexity: FeatureComplexity,
    pub estimated_prompts: u32,
    pub dependencies: Vec<String>,
    pub components: Vec<String>,
    pub phase: Phase,
    pub status: FeatureStatus,
    pub date_added: DateTime<Utc>,
    pub generated_code: String,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

/// Request body for a hand-written feature.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewFeature {
    pub name: String,
    pub description: String,
    pub complexity: FeatureComplexity,
    pub phase: Phase,
    pub dependencies: Vec<String>,
    pub components: Vec<String>,
    pub custom_prompt: String,
}

impl Default for NewFeature {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            complexity: FeatureComplexity::Medium,
            phase: Phase::Foundation,
            dependencies: Vec::new(),
            components: Vec::new(),
            custom_prompt: String::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Plan export shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseBuckets {
    pub foundation: Vec<Feature>,
    pub core: Vec<Feature>,
    pub advanced: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTotals {
    pub total_features: usize,
    pub completed_features: usize,
    pub estimated_prompts: u32,
}

/// The downloadable feature-plan document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project: Project,
    pub features: Vec<Feature>,
    pub phases: PhaseBuckets,
    pub summary: PlanTotals,
}
