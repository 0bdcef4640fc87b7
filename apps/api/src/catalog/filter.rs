//! Catalog filtering: category selector AND tier selector AND free-text query.
//!
//! Pure functions over borrowed slices. Results are references into the
//! source table, in source order; the table itself is never touched.

use crate::models::catalog::{
    BestPractice, IntegrationTool, PracticeCategory, PracticeDifficulty, PromptCategory,
    QuickPrompt, SkillTier, ToolCategory,
};
use crate::models::keyed::Keyed;

/// Sentinel accepted by every selector in place of a concrete key.
pub const ALL: &str = "all";

/// Either the "all" sentinel or one value of a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: Keyed> Selector<T> {
    /// Parses a query-string value. Absent, empty, and `all` select everything.
    pub fn parse(raw: Option<&str>) -> Result<Self, String> {
        match raw {
            None | Some("") | Some(ALL) => Ok(Selector::All),
            Some(key) => T::from_key(key).map(Selector::Only).ok_or_else(|| {
                let allowed: Vec<&str> = T::VARIANTS.iter().map(|v| v.key()).collect();
                format!("unknown value '{key}', expected '{ALL}' or one of: {}", allowed.join(", "))
            }),
        }
    }

    pub fn admits(&self, value: T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => *wanted == value,
        }
    }
}

/// A record that can be narrowed by category, tier and free text.
pub trait CatalogRecord {
    type Category: Keyed;
    type Tier: Keyed;

    fn category(&self) -> Self::Category;
    fn tier(&self) -> Self::Tier;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    /// Short free-text labels searched alongside title and description.
    fn tags(&self) -> &[String];
}

/// Transient filter selection, defaulting to "everything".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<C, T> {
    pub category: Selector<C>,
    pub tier: Selector<T>,
    pub query: String,
}

impl<C, T> Default for FilterState<C, T> {
    fn default() -> Self {
        Self {
            category: Selector::All,
            tier: Selector::All,
            query: String::new(),
        }
    }
}

impl<C: Keyed, T: Keyed> FilterState<C, T> {
    pub fn new(category: Selector<C>, tier: Selector<T>, query: impl Into<String>) -> Self {
        Self {
            category,
            tier,
            query: query.into(),
        }
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: CatalogRecord<Category = C, Tier = T>,
    {
        self.category.admits(record.category())
            && self.tier.admits(record.tier())
            && matches_query(record, &self.query)
    }
}

/// Returns the records admitted by `state`, preserving input order.
pub fn filter_records<'a, R>(records: &'a [R], state: &FilterState<R::Category, R::Tier>) -> Vec<&'a R>
where
    R: CatalogRecord,
{
    records.iter().filter(|r| state.matches(*r)).collect()
}

/// Case-insensitive substring match on title, description, or any tag.
/// An empty query matches everything.
fn matches_query<R: CatalogRecord>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    hit(record.title()) || hit(record.description()) || record.tags().iter().any(|t| hit(t))
}

impl CatalogRecord for QuickPrompt {
    type Category = PromptCategory;
    type Tier = SkillTier;

    fn category(&self) -> PromptCategory {
        self.category
    }
    fn tier(&self) -> SkillTier {
        self.complexity
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl CatalogRecord for BestPractice {
    type Category = PracticeCategory;
    type Tier = PracticeDifficulty;

    fn category(&self) -> PracticeCategory {
        self.category
    }
    fn tier(&self) -> PracticeDifficulty {
        self.difficulty
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn tags(&self) -> &[String] {
        &self.key_principles
    }
}

impl CatalogRecord for IntegrationTool {
    type Category = ToolCategory;
    type Tier = SkillTier;

    fn category(&self) -> ToolCategory {
        self.category
    }
    fn tier(&self) -> SkillTier {
        self.difficulty
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn tags(&self) -> &[String] {
        &self.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids<'a, R>(records: &[&'a R]) -> Vec<&'a str>
    where
        R: HasId,
    {
        records.iter().map(|r| HasId::id(*r)).collect()
    }

    trait HasId {
        fn id(&self) -> &str;
    }
    impl HasId for QuickPrompt {
        fn id(&self) -> &str {
            &self.id
        }
    }
    impl HasId for IntegrationTool {
        fn id(&self) -> &str {
            &self.id
        }
    }
    impl HasId for BestPractice {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_all_selectors_return_full_catalog_in_order() {
        let catalog = Catalog::embedded().unwrap();
        let result = filter_records(&catalog.quick_prompts, &FilterState::default());
        let expected: Vec<&str> = catalog.quick_prompts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_database_intermediate_prompts() {
        let catalog = Catalog::embedded().unwrap();
        let state = FilterState::new(
            Selector::Only(PromptCategory::Database),
            Selector::Only(SkillTier::Intermediate),
            "",
        );
        let result = filter_records(&catalog.quick_prompts, &state);
        assert_eq!(ids(&result), vec!["db-knex-migration", "prisma-schema"]);
    }

    #[test]
    fn test_query_is_case_insensitive_over_title() {
        let catalog = Catalog::embedded().unwrap();
        let state = FilterState::new(Selector::All, Selector::All, "gRAPHql RESOLVER");
        let result = filter_records(&catalog.quick_prompts, &state);
        assert_eq!(ids(&result), vec!["graphql-resolver"]);
    }

    #[test]
    fn test_query_matches_tags() {
        let catalog = Catalog::embedded().unwrap();
        let state = FilterState::new(Selector::All, Selector::All, "pinia");
        let result = filter_records(&catalog.quick_prompts, &state);
        // "pinia" appears only in a tag of the Vue prompt.
        assert_eq!(ids(&result), vec!["vue-composition-api"]);
    }

    #[test]
    fn test_query_matches_description() {
        let catalog = Catalog::embedded().unwrap();
        let state = FilterState::new(Selector::All, Selector::All, "multi-stage builds");
        let result = filter_records(&catalog.quick_prompts, &state);
        assert_eq!(ids(&result), vec!["docker-deployment"]);
    }

    #[test]
    fn test_every_title_substring_finds_its_record() {
        let catalog = Catalog::embedded().unwrap();
        for prompt in &catalog.quick_prompts {
            let needle: String = prompt.title.chars().skip(2).take(6).collect();
            let state = FilterState::new(Selector::All, Selector::All, needle.clone());
            let result = filter_records(&catalog.quick_prompts, &state);
            assert!(
                result.iter().any(|r| r.id == prompt.id),
                "'{needle}' should find {}",
                prompt.id
            );
        }
    }

    #[test]
    fn test_predicates_are_anded() {
        let catalog = Catalog::embedded().unwrap();
        // "react" hits two prompts, only one of which is a component.
        let state = FilterState::new(Selector::Only(PromptCategory::Component), Selector::All, "react");
        let result = filter_records(&catalog.quick_prompts, &state);
        assert_eq!(ids(&result), vec!["react-component-library"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = Catalog::embedded().unwrap();
        let state = FilterState::new(
            Selector::Only(PromptCategory::Security),
            Selector::Only(SkillTier::Beginner),
            "",
        );
        assert!(filter_records(&catalog.quick_prompts, &state).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::embedded().unwrap();
        let state = FilterState::new(Selector::All, Selector::Only(SkillTier::Advanced), "e");
        let once: Vec<QuickPrompt> = filter_records(&catalog.quick_prompts, &state)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_records(&once, &state);
        assert_eq!(
            ids(&twice),
            once.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let catalog = Catalog::embedded().unwrap();
        let before: Vec<String> = catalog.quick_prompts.iter().map(|p| p.id.clone()).collect();
        let state = FilterState::new(Selector::Only(PromptCategory::Api), Selector::All, "rest");
        let _ = filter_records(&catalog.quick_prompts, &state);
        let after: Vec<String> = catalog.quick_prompts.iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_tools_filter_by_category_and_difficulty() {
        let catalog = Catalog::embedded().unwrap();
        let state = FilterState::new(Selector::Only(ToolCategory::Api), Selector::Only(SkillTier::Advanced), "");
        assert_eq!(ids(&filter_records(&catalog.tools, &state)), vec!["claude-api"]);

        let beginners = FilterState::new(Selector::All, Selector::Only(SkillTier::Beginner), "");
        assert_eq!(
            ids(&filter_records(&catalog.tools, &beginners)),
            vec!["claude-desktop-vscode", "cursor-ide"]
        );
    }

    #[test]
    fn test_practices_filter_by_difficulty() {
        let catalog = Catalog::embedded().unwrap();
        let state = FilterState::new(Selector::All, Selector::Only(PracticeDifficulty::Intermediate), "");
        assert_eq!(
            ids(&filter_records(&catalog.best_practices, &state)),
            vec!["iterative-refinement", "team-collaboration"]
        );
    }

    #[test]
    fn test_practice_query_reaches_key_principles() {
        let catalog = Catalog::embedded().unwrap();
        // "OWASP" appears only in a key principle, never in a title or description.
        let state = FilterState::new(Selector::All, Selector::All, "owasp TOP 10");
        assert_eq!(
            ids(&filter_records(&catalog.best_practices, &state)),
            vec!["security-best-practices"]
        );
    }

    #[test]
    fn test_tool_query_reaches_features() {
        let catalog = Catalog::embedded().unwrap();
        let state = FilterState::new(Selector::All, Selector::All, "INLINE code");
        assert_eq!(ids(&filter_records(&catalog.tools, &state)), vec!["cursor-ide"]);

        let scoped = FilterState::new(Selector::Only(ToolCategory::Api), Selector::All, "inline code");
        assert!(filter_records(&catalog.tools, &scoped).is_empty());
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::<SkillTier>::parse(None).unwrap(), Selector::All);
        assert_eq!(Selector::<SkillTier>::parse(Some("all")).unwrap(), Selector::All);
        assert_eq!(
            Selector::<SkillTier>::parse(Some("advanced")).unwrap(),
            Selector::Only(SkillTier::Advanced)
        );
        let err = Selector::<SkillTier>::parse(Some("expert")).unwrap_err();
        assert!(err.contains("expert"));
        assert!(err.contains("beginner"));
    }
}
