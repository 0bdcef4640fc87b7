//! Phrase tables: closed option sets and the canned sentence each one expands to.
//!
//! Every variant has exactly one phrase and no two variants share one; the
//! tests enumerate the tables to hold that.

use serde::{Deserialize, Serialize};

use crate::models::keyed::{impl_keyed, Keyed};

/// A keyed option that resolves to a fixed descriptive sentence.
pub trait Phrased: Keyed {
    fn phrase(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Junior,
    MidLevel,
    #[default]
    Senior,
    Principal,
    Architect,
}

impl_keyed!(ExperienceLevel {
    Junior => "junior",
    MidLevel => "mid-level",
    Senior => "senior",
    Principal => "principal",
    Architect => "architect",
});

impl Phrased for ExperienceLevel {
    fn phrase(self) -> &'static str {
        match self {
            Self::Junior => "You are a junior software engineer with 1-3 years of experience, eager to learn and follow established best practices.",
            Self::MidLevel => "You are a mid-level software engineer with 3-7 years of experience, capable of making architectural decisions and mentoring junior developers.",
            Self::Senior => "You are a senior software engineer with 7+ years of experience, expert in system design, code quality, and technical leadership.",
            Self::Principal => "You are a principal/staff engineer with 10+ years of experience, expert in large-scale systems, architecture, and technical strategy.",
            Self::Architect => "You are a solutions architect with deep expertise in system design, scalability, and enterprise-level decision making.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodingStyle {
    #[default]
    Functional,
    ObjectOriented,
    Hybrid,
    Reactive,
}

impl_keyed!(CodingStyle {
    Functional => "functional",
    ObjectOriented => "object-oriented",
    Hybrid => "hybrid",
    Reactive => "reactive",
});

impl Phrased for CodingStyle {
    fn phrase(self) -> &'static str {
        match self {
            Self::Functional => "You strongly prefer functional programming patterns, immutability, and pure functions wherever possible.",
            Self::ObjectOriented => "You follow object-oriented principles with proper encapsulation, inheritance, and polymorphism.",
            Self::Hybrid => "You choose the most appropriate paradigm (functional, OOP, or procedural) based on the specific problem context.",
            Self::Reactive => "You prefer reactive programming patterns, event-driven architectures, and declarative code styles.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentationLevel {
    Minimal,
    Moderate,
    #[default]
    Comprehensive,
    Tutorial,
}

impl_keyed!(DocumentationLevel {
    Minimal => "minimal",
    Moderate => "moderate",
    Comprehensive => "comprehensive",
    Tutorial => "tutorial",
});

impl Phrased for DocumentationLevel {
    fn phrase(self) -> &'static str {
        match self {
            Self::Minimal => "You write concise, essential comments only for complex logic.",
            Self::Moderate => "You provide clear comments for functions and non-obvious code sections.",
            Self::Comprehensive => "You write detailed documentation including function purposes, parameters, return values, and examples.",
            Self::Tutorial => "You write extensive documentation that could teach someone the concepts and implementation details.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExplanationLevel {
    Brief,
    Balanced,
    #[default]
    Detailed,
    Educational,
}

impl_keyed!(ExplanationLevel {
    Brief => "brief",
    Balanced => "balanced",
    Detailed => "detailed",
    Educational => "educational",
});

impl Phrased for ExplanationLevel {
    fn phrase(self) -> &'static str {
        match self {
            Self::Brief => "You provide concise explanations focusing on key decisions and implementation details.",
            Self::Balanced => "You explain important concepts and decisions with moderate detail.",
            Self::Detailed => "You provide thorough explanations of concepts, decisions, and alternative approaches.",
            Self::Educational => "You explain everything in detail as if teaching, including background concepts and learning resources.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseStyle {
    #[default]
    Professional,
    Friendly,
    Mentor,
    Collaborative,
}

impl_keyed!(ResponseStyle {
    Professional => "professional",
    Friendly => "friendly",
    Mentor => "mentor",
    Collaborative => "collaborative",
});

impl Phrased for ResponseStyle {
    fn phrase(self) -> &'static str {
        match self {
            Self::Professional => "You maintain a professional, direct communication style focused on technical excellence.",
            Self::Friendly => "You use a warm, approachable tone while maintaining technical accuracy.",
            Self::Mentor => "You adopt a mentoring tone, explaining concepts and guiding learning.",
            Self::Collaborative => "You communicate as a peer collaborator, discussing tradeoffs and seeking input.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamSkillLevel {
    Junior,
    #[default]
    Mixed,
    Senior,
    Expert,
}

impl_keyed!(TeamSkillLevel {
    Junior => "junior",
    Mixed => "mixed",
    Senior => "senior",
    Expert => "expert",
});

impl Phrased for TeamSkillLevel {
    fn phrase(self) -> &'static str {
        match self {
            Self::Junior => "You write code primarily for junior developers, with extensive comments and simple, readable patterns.",
            Self::Mixed => "You write code that can be maintained by developers of varying skill levels, balancing clarity with efficiency.",
            Self::Senior => "You write code for experienced developers, using advanced patterns and concise, expressive implementations.",
            Self::Expert => "You write code for expert-level developers, utilizing sophisticated patterns and domain-specific optimizations.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodebaseType {
    Prototype,
    Mvp,
    #[default]
    Production,
    Enterprise,
}

impl_keyed!(CodebaseType {
    Prototype => "prototype",
    Mvp => "mvp",
    Production => "production",
    Enterprise => "enterprise",
});

impl Phrased for CodebaseType {
    fn phrase(self) -> &'static str {
        match self {
            Self::Prototype => "You prioritize speed and experimentation over long-term maintainability.",
            Self::Mvp => "You balance rapid development with basic maintainability and scalability considerations.",
            Self::Production => "You write production-ready code with full error handling, testing, and long-term maintainability.",
            Self::Enterprise => "You write enterprise-grade code with extensive documentation, compliance considerations, and scalability planning.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceTimeframe {
    ShortTerm,
    MediumTerm,
    #[default]
    LongTerm,
    Legacy,
}

impl_keyed!(MaintenanceTimeframe {
    ShortTerm => "short-term",
    MediumTerm => "medium-term",
    LongTerm => "long-term",
    Legacy => "legacy",
});

impl Phrased for MaintenanceTimeframe {
    fn phrase(self) -> &'static str {
        match self {
            Self::ShortTerm => "You optimize for immediate functionality with basic maintainability.",
            Self::MediumTerm => "You balance current needs with reasonable future flexibility (6-18 months).",
            Self::LongTerm => "You design for long-term maintainability and evolution (2-5+ years).",
            Self::Legacy => "You design systems meant to last for many years with minimal changes.",
        }
    }
}

// S.C.A.F.F. options are interpolated by key, so they carry no phrase.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AudienceLevel {
    Junior,
    #[default]
    MidLevel,
    Senior,
    Mixed,
    Expert,
}

impl_keyed!(AudienceLevel {
    Junior => "junior",
    MidLevel => "mid-level",
    Senior => "senior",
    Mixed => "mixed",
    Expert => "expert",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodebaseVisibility {
    #[default]
    Internal,
    External,
    OpenSource,
}

impl_keyed!(CodebaseVisibility {
    Internal => "internal",
    External => "external",
    OpenSource => "open-source",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptType {
    #[default]
    Standard,
    ExampleDriven,
    ConstraintBased,
    TestDriven,
}

impl_keyed!(PromptType {
    Standard => "standard",
    ExampleDriven => "example-driven",
    ConstraintBased => "constraint-based",
    TestDriven => "test-driven",
});

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::keyed::assert_keys_match_serde;

    fn assert_injective<T: Phrased + std::fmt::Display>() {
        let mut seen = HashSet::new();
        for v in T::VARIANTS {
            let phrase = v.phrase();
            assert!(!phrase.is_empty(), "{v} has an empty phrase");
            assert!(seen.insert(phrase), "{v} shares its phrase with another option");
        }
    }

    #[test]
    fn test_phrase_tables_are_injective() {
        assert_injective::<ExperienceLevel>();
        assert_injective::<CodingStyle>();
        assert_injective::<DocumentationLevel>();
        assert_injective::<ExplanationLevel>();
        assert_injective::<ResponseStyle>();
        assert_injective::<TeamSkillLevel>();
        assert_injective::<CodebaseType>();
        assert_injective::<MaintenanceTimeframe>();
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        assert_eq!(ExperienceLevel::default(), ExperienceLevel::Senior);
        assert_eq!(CodingStyle::default(), CodingStyle::Functional);
        assert_eq!(DocumentationLevel::default(), DocumentationLevel::Comprehensive);
        assert_eq!(ExplanationLevel::default(), ExplanationLevel::Detailed);
        assert_eq!(ResponseStyle::default(), ResponseStyle::Professional);
        assert_eq!(TeamSkillLevel::default(), TeamSkillLevel::Mixed);
        assert_eq!(CodebaseType::default(), CodebaseType::Production);
        assert_eq!(MaintenanceTimeframe::default(), MaintenanceTimeframe::LongTerm);
        assert_eq!(AudienceLevel::default(), AudienceLevel::MidLevel);
        assert_eq!(CodebaseVisibility::default(), CodebaseVisibility::Internal);
        assert_eq!(PromptType::default(), PromptType::Standard);
    }

    #[test]
    fn test_senior_phrase() {
        assert_eq!(
            ExperienceLevel::Senior.phrase(),
            "You are a senior software engineer with 7+ years of experience, expert in system design, code quality, and technical leadership."
        );
    }

    #[test]
    fn test_keys_agree_with_derived_serde() {
        assert_keys_match_serde::<ExperienceLevel>();
        assert_keys_match_serde::<CodingStyle>();
        assert_keys_match_serde::<DocumentationLevel>();
        assert_keys_match_serde::<ExplanationLevel>();
        assert_keys_match_serde::<ResponseStyle>();
        assert_keys_match_serde::<TeamSkillLevel>();
        assert_keys_match_serde::<CodebaseType>();
        assert_keys_match_serde::<MaintenanceTimeframe>();
        assert_keys_match_serde::<AudienceLevel>();
        assert_keys_match_serde::<CodebaseVisibility>();
        assert_keys_match_serde::<PromptType>();
    }

    #[test]
    fn test_keys_use_kebab_case() {
        assert_eq!(MaintenanceTimeframe::from_key("short-term"), Some(MaintenanceTimeframe::ShortTerm));
        assert_eq!(CodingStyle::from_key("object-oriented"), Some(CodingStyle::ObjectOriented));
        assert_eq!(CodebaseVisibility::OpenSource.key(), "open-source");
    }
}
