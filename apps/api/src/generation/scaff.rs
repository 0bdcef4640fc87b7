//! S.C.A.F.F. user-prompt generator (Situation, Challenge, Audience,
//! Format, Foundations), with optional examples, constraints or test cases
//! depending on the prompt type.

use serde::{Deserialize, Serialize};

use super::assembler::{Assembler, HeadingStyle, Section};
use super::phrases::{AudienceLevel, CodebaseVisibility, PromptType};
use super::prompts::{SCAFF_DEFAULT_FOUNDATIONS, SCAFF_INSTRUCTION};
use crate::models::keyed::lenient;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaffForm {
    // Situation
    pub project_type: String,
    pub tech_stack: String,
    pub architecture: String,
    pub existing_patterns: String,
    pub constraints: String,

    // Challenge
    pub task_description: String,
    pub inputs: String,
    pub outputs: String,
    pub performance: String,
    pub requirements: String,

    // Audience
    #[serde(deserialize_with = "lenient")]
    pub team_level: AudienceLevel,
    pub tech_familiarity: String,
    pub maintenance: String,
    #[serde(deserialize_with = "lenient")]
    pub codebase: CodebaseVisibility,

    // Format
    pub coding_style: String,
    pub conventions: String,
    pub documentation: String,
    pub testing: String,
    pub structure: String,

    // Foundations
    pub security: String,
    pub error_handling: String,
    pub accessibility: String,
    pub compliance: String,
    pub logging: String,

    // Advanced
    #[serde(deserialize_with = "lenient")]
    pub prompt_type: PromptType,
    pub examples: String,
    #[serde(alias = "constraints_advanced")]
    pub constraints_advanced: String,
    pub test_cases: String,
}

pub fn generate_scaff_prompt(form: &ScaffForm) -> String {
    let mut doc = Assembler::new(HeadingStyle::Bold);

    let mut situation = Section::mandatory("SITUATION");
    situation
        .field_clause(&form.project_type, |v| format!("I'm building {v}"))
        .field_clause(&form.tech_stack, |v| format!(" using {v}"))
        .field_clause(&form.architecture, |v| {
            format!(". The application follows {v}")
        })
        .field_clause(&form.existing_patterns, |v| {
            format!(". Current codebase patterns include: {v}")
        })
        .field_clause(&form.constraints, |v| {
            format!(". Technical constraints: {v}")
        })
        .terminate(".\n\n");
    doc.push(situation);

    let mut challenge = Section::mandatory("CHALLENGE");
    challenge
        .field_clause(&form.task_description, str::to_string)
        .field_clause(&form.inputs, |v| format!(". Expected inputs: {v}"))
        .field_clause(&form.outputs, |v| format!(". Expected outputs: {v}"))
        .field_clause(&form.performance, |v| {
            format!(". Performance requirements: {v}")
        })
        .field_clause(&form.requirements, |v| {
            format!(". Additional requirements: {v}")
        })
        .terminate(".\n\n");
    doc.push(challenge);

    let mut audience = Section::mandatory("AUDIENCE");
    audience
        .clause(format!(
            "This code will be maintained by {} developers",
            form.team_level
        ))
        .field_clause(&form.tech_familiarity, |v| format!(" with {v}"))
        .field_clause(&form.maintenance, |v| {
            format!(". Maintenance timeline: {v}")
        })
        .clause(format!(". This is {} codebase", form.codebase))
        .terminate(".\n\n");
    doc.push(audience);

    let mut format = Section::mandatory("FORMAT");
    format
        .field_clause(&form.coding_style, |v| format!("Use {v} coding style"))
        .field_clause(&form.conventions, |v| {
            format!(". Follow {v} conventions")
        })
        .field_clause(&form.documentation, |v| format!(". Documentation: {v}"))
        .field_clause(&form.testing, |v| format!(". Testing: {v}"))
        .field_clause(&form.structure, |v| format!(". Code structure: {v}"))
        .terminate(".\n\n");
    doc.push(format);

    let mut foundations = Section::mandatory("FOUNDATIONS");
    let items: Vec<String> = [
        ("Security", &form.security),
        ("Error handling", &form.error_handling),
        ("Accessibility", &form.accessibility),
        ("Compliance", &form.compliance),
        ("Logging", &form.logging),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{label}: {value}"))
    .collect();
    if items.is_empty() {
        foundations.clause(SCAFF_DEFAULT_FOUNDATIONS);
    } else {
        foundations.clause(items.join(". ")).clause(".");
    }
    foundations.terminate("\n\n");
    doc.push(foundations);

    let mut examples = Section::optional("EXAMPLES");
    let mut constraints = Section::optional("CONSTRAINTS");
    let mut test_cases = Section::optional("TEST CASES");
    match form.prompt_type {
        PromptType::ExampleDriven => {
            examples.field(&form.examples, |v| {
                format!("Here are examples of our existing code patterns:\n{v}")
            });
        }
        PromptType::ConstraintBased => {
            constraints.field(&form.constraints_advanced, str::to_string);
        }
        PromptType::TestDriven => {
            test_cases.field(&form.test_cases, |v| {
                format!("The implementation should pass the following test cases:\n{v}")
            });
        }
        PromptType::Standard => {}
    }
    doc.push(examples).push(constraints).push(test_cases);

    let mut instruction = Section::mandatory("INSTRUCTION");
    instruction.clause(SCAFF_INSTRUCTION);
    doc.push(instruction);

    doc.finish()
}
