//! System-prompt generator: a persistent "persona" document for an AI
//! coding assistant, built from the seven-section form.

use serde::{Deserialize, Serialize};

use super::assembler::{Assembler, HeadingStyle, Section};
use super::phrases::{
    CodebaseType, CodingStyle, DocumentationLevel, ExperienceLevel, ExplanationLevel,
    MaintenanceTimeframe, Phrased, ResponseStyle, TeamSkillLevel,
};
use super::prompts::{
    SYSTEM_CLOSING_REMINDER, SYSTEM_DEFAULT_ERROR_HANDLING, SYSTEM_DEFAULT_QUESTION_HANDLING,
    SYSTEM_DEFAULT_SECURITY, SYSTEM_RESPONSE_FORMAT,
};
use crate::models::keyed::lenient;

/// Every field is optional on the wire; enums fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemPromptForm {
    // Core identity
    #[serde(deserialize_with = "lenient")]
    pub experience_level: ExperienceLevel,
    pub specializations: String,
    pub primary_tech_stack: String,
    pub architectural_patterns: String,

    // Coding philosophy
    #[serde(deserialize_with = "lenient")]
    pub coding_style: CodingStyle,
    pub quality_standards: String,
    pub performance_approach: String,
    #[serde(deserialize_with = "lenient")]
    pub documentation_level: DocumentationLevel,

    // Security & best practices
    pub security_approach: String,
    pub error_handling_style: String,
    pub testing_philosophy: String,
    pub accessibility_standards: String,

    // Communication
    #[serde(deserialize_with = "lenient")]
    pub explanation_level: ExplanationLevel,
    pub commenting_style: String,
    #[serde(deserialize_with = "lenient")]
    pub response_style: ResponseStyle,
    pub question_handling: String,

    // Team context
    #[serde(deserialize_with = "lenient")]
    pub team_skill_level: TeamSkillLevel,
    #[serde(deserialize_with = "lenient")]
    pub codebase_type: CodebaseType,
    #[serde(deserialize_with = "lenient")]
    pub maintenance_timeframe: MaintenanceTimeframe,
    pub handoff_requirements: String,

    // Technical preferences
    pub framework_preferences: String,
    pub tooling_preferences: String,
    pub deployment_context: String,
    pub scalability_considerations: String,

    // Custom rules
    pub do_always: String,
    pub never_do: String,
    pub priority_order: String,
    pub special_instructions: String,
}

pub fn generate_system_prompt(form: &SystemPromptForm) -> String {
    let mut doc = Assembler::new(HeadingStyle::Markdown);

    let mut identity = Section::mandatory("CORE IDENTITY");
    identity
        .paragraph(form.experience_level.phrase())
        .field(&form.specializations, |v| {
            format!("Your core specializations include: {v}.")
        })
        .field(&form.primary_tech_stack, |v| {
            format!("Your primary technology expertise covers: {v}.")
        })
        .field(&form.architectural_patterns, |v| {
            format!("You prefer and recommend these architectural patterns: {v}.")
        });
    doc.push(identity);

    let mut philosophy = Section::mandatory("CODING PHILOSOPHY");
    philosophy
        .paragraph(form.coding_style.phrase())
        .field(&form.quality_standards, |v| {
            format!("Your quality standards include: {v}.")
        })
        .field(&form.performance_approach, |v| {
            format!("Your approach to performance: {v}.")
        })
        .paragraph(format!(
            "Documentation style: {}",
            form.documentation_level.phrase()
        ));
    doc.push(philosophy);

    let mut security = Section::mandatory("SECURITY & BEST PRACTICES");
    security
        .field_or(
            &form.security_approach,
            |v| format!("Security approach: {v}."),
            SYSTEM_DEFAULT_SECURITY,
        )
        .field_or(
            &form.error_handling_style,
            |v| format!("Error handling philosophy: {v}."),
            SYSTEM_DEFAULT_ERROR_HANDLING,
        )
        .field(&form.testing_philosophy, |v| format!("Testing approach: {v}."))
        .field(&form.accessibility_standards, |v| {
            format!("Accessibility standards: {v}.")
        });
    doc.push(security);

    let mut communication = Section::mandatory("COMMUNICATION STYLE");
    communication
        .paragraph(form.explanation_level.phrase())
        .paragraph(form.response_style.phrase())
        .field(&form.commenting_style, |v| {
            format!("Code commenting style: {v}.")
        })
        .field_or(
            &form.question_handling,
            |v| format!("When requirements are unclear: {v}."),
            SYSTEM_DEFAULT_QUESTION_HANDLING,
        );
    doc.push(communication);

    let mut team = Section::mandatory("TEAM & PROJECT CONTEXT");
    team.paragraph(format!("Target audience: {}", form.team_skill_level.phrase()))
        .paragraph(format!("Codebase type: {}", form.codebase_type.phrase()))
        .paragraph(format!(
            "Maintenance timeframe: {}",
            form.maintenance_timeframe.phrase()
        ))
        .field(&form.handoff_requirements, |v| {
            format!("Handoff requirements: {v}.")
        });
    doc.push(team);

    let mut technical = Section::optional("TECHNICAL PREFERENCES");
    technical
        .field(&form.framework_preferences, |v| {
            format!("Framework preferences: {v}.")
        })
        .field(&form.tooling_preferences, |v| {
            format!("Tooling preferences: {v}.")
        })
        .field(&form.deployment_context, |v| {
            format!("Deployment context: {v}.")
        })
        .field(&form.scalability_considerations, |v| {
            format!("Scalability approach: {v}.")
        });
    doc.push(technical);

    // Rules are quoted verbatim, so no trailing period is added.
    let mut rules = Section::optional("CUSTOM RULES");
    rules
        .field(&form.do_always, |v| format!("ALWAYS: {v}"))
        .field(&form.never_do, |v| format!("NEVER: {v}"))
        .field(&form.priority_order, |v| format!("PRIORITY ORDER: {v}"))
        .field(&form.special_instructions, |v| {
            format!("SPECIAL INSTRUCTIONS: {v}")
        });
    doc.push(rules);

    let mut response = Section::mandatory("RESPONSE FORMAT");
    response
        .terminate(SYSTEM_RESPONSE_FORMAT)
        .terminate(SYSTEM_CLOSING_REMINDER);
    doc.push(response);

    doc.finish()
}
