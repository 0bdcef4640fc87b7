//! Per-feature prompt built from a plan's project context.

use super::assembler::{Assembler, HeadingStyle, Section};
use super::prompts::{
    FEATURE_AUDIENCE, FEATURE_DEFAULT_PROJECT, FEATURE_DEFAULT_TECH_STACK, FEATURE_FORMAT,
    FEATURE_FOUNDATIONS,
};
use crate::models::feature::{Feature, FeatureStatus, Project};

/// Names of completed features that `feature` depends on, in plan order.
///
/// Order follows `all`, not `feature.dependencies`.
pub fn completed_dependencies<'a>(feature: &Feature, all: &'a [Feature]) -> Vec<&'a str> {
    all.iter()
        .filter(|f| f.status == FeatureStatus::Completed && feature.dependencies.contains(&f.name))
        .map(|f| f.name.as_str())
        .collect()
}

pub fn generate_feature_prompt(feature: &Feature, project: &Project, all: &[Feature]) -> String {
    let mut doc = Assembler::new(HeadingStyle::Inline);

    let name = non_empty_or(&project.name, FEATURE_DEFAULT_PROJECT);
    let stack = non_empty_or(&project.tech_stack, FEATURE_DEFAULT_TECH_STACK);
    let mut situation = Section::mandatory("SITUATION");
    situation
        .clause(format!("I'm building {name} using {stack}."))
        .field_clause(&project.architecture, |v| {
            format!(" The application follows {v}.")
        });
    let done = completed_dependencies(feature, all);
    if !done.is_empty() {
        situation.clause(format!(" I have already implemented: {}.", done.join(", ")));
    }
    doc.push(situation);

    let mut challenge = Section::mandatory("CHALLENGE");
    challenge.clause(format!("Create a complete {} that includes:", feature.name));
    for component in &feature.components {
        challenge.clause(format!("\n- {component}"));
    }
    challenge.clause(format!("\n\n{}", feature.description));
    doc.push(challenge);

    for (title, text) in [
        ("AUDIENCE", FEATURE_AUDIENCE),
        ("FORMAT", FEATURE_FORMAT),
        ("FOUNDATIONS", FEATURE_FOUNDATIONS),
    ] {
        let mut section = Section::mandatory(title);
        section.clause(text);
        doc.push(section);
    }

    let mut extra = Section::optional("ADDITIONAL REQUIREMENTS");
    extra.field_clause(feature.custom_prompt.as_deref().unwrap_or_default(), str::to_string);
    doc.push(extra);

    doc.finish()
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
