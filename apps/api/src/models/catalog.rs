//! Catalog records: quick prompts, best practices, integration tools and the
//! smaller listings that accompany them. All of it is static data, parsed once
//! at startup and never mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::keyed::impl_keyed;

// ────────────────────────────────────────────────────────────────────────────
// Closed value sets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptCategory {
    Database,
    Api,
    Component,
    Testing,
    Deployment,
    Security,
    Performance,
}

impl_keyed!(PromptCategory {
    Database => "database",
    Api => "api",
    Component => "component",
    Testing => "testing",
    Deployment => "deployment",
    Security => "security",
    Performance => "performance",
});

/// Skill tier shared by quick-prompt complexity and tool difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl_keyed!(SkillTier {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeCategory {
    PromptEngineering,
    CodeQuality,
    Security,
    TeamCollaboration,
}

impl_keyed!(PracticeCategory {
    PromptEngineering => "prompt-engineering",
    CodeQuality => "code-quality",
    Security => "security",
    TeamCollaboration => "team-collaboration",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeDifficulty {
    Essential,
    Intermediate,
    Advanced,
}

impl_keyed!(PracticeDifficulty {
    Essential => "essential",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl_keyed!(Impact {
    High => "high",
    Medium => "medium",
    Low => "low",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechniqueCategory {
    PromptCrafting,
    Iteration,
    QualityAssurance,
}

impl_keyed!(TechniqueCategory {
    PromptCrafting => "prompt-crafting",
    Iteration => "iteration",
    QualityAssurance => "quality-assurance",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    AiTools,
    Ides,
    Workflow,
    Api,
}

impl_keyed!(ToolCategory {
    AiTools => "ai-tools",
    Ides => "ides",
    Workflow => "workflow",
    Api => "api",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipCategory {
    Productivity,
    Quality,
    Collaboration,
}

impl_keyed!(TipCategory {
    Productivity => "productivity",
    Quality => "quality",
    Collaboration => "collaboration",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    Blue,
    Green,
    Purple,
    Yellow,
    Indigo,
    Red,
    Orange,
}

impl_keyed!(ColorScheme {
    Blue => "blue",
    Green => "green",
    Purple => "purple",
    Yellow => "yellow",
    Indigo => "indigo",
    Red => "red",
    Orange => "orange",
});

/// Symbolic icon reference. Resolved to artwork by whichever client renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    BookOpen,
    Brain,
    CheckCircle,
    Cloud,
    Code,
    Code2,
    Database,
    GitBranch,
    Globe,
    Layers,
    Monitor,
    Settings,
    Shield,
    Sparkles,
    Target,
    TestTube,
    TrendingUp,
    Users,
    Zap,
}

impl_keyed!(IconKind {
    BookOpen => "book-open",
    Brain => "brain",
    CheckCircle => "check-circle",
    Cloud => "cloud",
    Code => "code",
    Code2 => "code2",
    Database => "database",
    GitBranch => "git-branch",
    Globe => "globe",
    Layers => "layers",
    Monitor => "monitor",
    Settings => "settings",
    Shield => "shield",
    Sparkles => "sparkles",
    Target => "target",
    TestTube => "test-tube",
    TrendingUp => "trending-up",
    Users => "users",
    Zap => "zap",
});

// ────────────────────────────────────────────────────────────────────────────
// Quick prompt library
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickPrompt {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: PromptCategory,
    pub tags: Vec<String>,
    pub complexity: SkillTier,
    pub estimated_time: String,
    pub prompt: String,
    pub use_case: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    pub last_updated: NaiveDate,
}

/// Display metadata for one prompt category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptCategoryInfo {
    pub id: PromptCategory,
    pub name: String,
    pub description: String,
    pub icon: IconKind,
    pub color: ColorScheme,
}

// ────────────────────────────────────────────────────────────────────────────
// Best practices
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestPractice {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: PracticeCategory,
    pub difficulty: PracticeDifficulty,
    pub impact: Impact,
    pub icon: IconKind,
    pub key_principles: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub actionable_steps: Vec<ActionableStep>,
    pub examples: Vec<PracticeExample>,
    /// Ids of other practices. Not checked for existence.
    #[serde(default)]
    pub related_practices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionableStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeExample {
    pub id: String,
    pub title: String,
    pub scenario: String,
    pub bad_example: String,
    pub good_example: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technique {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TechniqueCategory,
    pub use_when: String,
    pub example: String,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntiPattern {
    pub id: String,
    pub name: String,
    pub description: String,
    pub why_problematic: String,
    pub how_to_fix: String,
    pub example: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Tool integration guide
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationTool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ToolCategory,
    pub difficulty: SkillTier,
    pub estimated_setup_time: String,
    pub icon: IconKind,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub best_for: Vec<String>,
    pub requirements: Vec<String>,
    pub setup_steps: Vec<SetupStep>,
    #[serde(default)]
    pub code_examples: Vec<CodeExample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_docs: Option<String>,
    #[serde(default)]
    pub community_resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub id: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: IconKind,
    pub category: TipCategory,
}

// ────────────────────────────────────────────────────────────────────────────
// Landing page directory
// ────────────────────────────────────────────────────────────────────────────

/// One entry of the landing-page tool directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRoute {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: IconKind,
    pub color: ColorScheme,
    pub features: Vec<String>,
    pub use_case: String,
    pub path: String,
    pub is_available: bool,
}
