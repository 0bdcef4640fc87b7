// Feature planner: per-project feature lists built from templates or by hand,
// with progress tracking, per-feature prompts, and JSON export.

pub mod handlers;
pub mod plan;
pub mod store;
