//! Feature plan controller: one project plus its ordered feature list.

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::generation::feature_prompt::generate_feature_prompt;
use crate::models::feature::{
    Feature, FeatureStatus, FeatureTemplate, NewFeature, Phase, PhaseBuckets, PlanTotals, Project,
    ProjectSummary,
};
use crate::models::keyed::Keyed;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Plan {0} not found")]
    PlanNotFound(Uuid),

    #[error("Feature {0} not found")]
    FeatureNotFound(String),

    #[error("Feature {0} is required")]
    MissingField(&'static str),
}

/// Completion of one build phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseProgress {
    pub phase: Phase,
    pub completed: usize,
    pub total: usize,
    /// `completed / total * 100`, or 0 for an empty phase.
    pub percent: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FeaturePlan {
    project: Project,
    features: Vec<Feature>,
}

impl FeaturePlan {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            features: Vec::new(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn set_project(&mut self, project: Project) {
        self.project = project;
    }

    pub fn feature(&self, id: &str) -> Result<&Feature, PlanError> {
        self.features
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| PlanError::FeatureNotFound(id.to_string()))
    }

    fn feature_mut(&mut self, id: &str) -> Result<&mut Feature, PlanError> {
        self.features
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| PlanError::FeatureNotFound(id.to_string()))
    }

    /// Appends a pending copy of `template` to the plan.
    pub fn add_from_template(&mut self, template: &FeatureTemplate, phase: Phase) -> &Feature {
        self.push(Feature {
            id: Uuid::new_v4().to_string(),
            name: template.name.clone(),
            description: template.description.clone(),
            complexity: template.complexity,
            estimated_prompts: template.estimated_prompts,
            dependencies: template.dependencies.clone(),
            components: template.components.clone(),
            phase,
            status: FeatureStatus::Pending,
            date_added: Utc::now(),
            generated_code: String::new(),
            notes: String::new(),
            custom_prompt: None,
        })
    }

    /// Appends a hand-written feature. Name and description must be non-blank;
    /// blank components are dropped.
    pub fn add_custom(&mut self, new: NewFeature) -> Result<&Feature, PlanError> {
        if new.name.trim().is_empty() {
            return Err(PlanError::MissingField("name"));
        }
        if new.description.trim().is_empty() {
            return Err(PlanError::MissingField("description"));
        }

        let components = new
            .components
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect();

        Ok(self.push(Feature {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            complexity: new.complexity,
            estimated_prompts: 1,
            dependencies: new.dependencies,
            components,
            phase: new.phase,
            status: FeatureStatus::Pending,
            date_added: Utc::now(),
            generated_code: String::new(),
            notes: String::new(),
            custom_prompt: Some(new.custom_prompt).filter(|p| !p.is_empty()),
        }))
    }

    fn push(&mut self, feature: Feature) -> &Feature {
        self.features.push(feature);
        &self.features[self.features.len() - 1]
    }

    pub fn update_status(&mut self, id: &str, status: FeatureStatus) -> Result<&Feature, PlanError> {
        let feature = self.feature_mut(id)?;
        feature.status = status;
        Ok(feature)
    }

    pub fn update_notes(&mut self, id: &str, notes: String) -> Result<&Feature, PlanError> {
        let feature = self.feature_mut(id)?;
        feature.notes = notes;
        Ok(feature)
    }

    pub fn delete(&mut self, id: &str) -> Result<Feature, PlanError> {
        let index = self
            .features
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| PlanError::FeatureNotFound(id.to_string()))?;
        Ok(self.features.remove(index))
    }

    pub fn feature_prompt(&self, id: &str) -> Result<String, PlanError> {
        let feature = self.feature(id)?;
        Ok(generate_feature_prompt(feature, &self.project, &self.features))
    }

    pub fn phase_progress(&self, phase: Phase) -> PhaseProgress {
        let in_phase = self.features.iter().filter(|f| f.phase == phase);
        let total = in_phase.clone().count();
        let completed = in_phase
            .filter(|f| f.status == FeatureStatus::Completed)
            .count();
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        PhaseProgress {
            phase,
            completed,
            total,
            percent,
        }
    }

    pub fn progress(&self) -> Vec<PhaseProgress> {
        Phase::VARIANTS
            .iter()
            .map(|phase| self.phase_progress(*phase))
            .collect()
    }

    /// The downloadable plan document.
    pub fn summary(&self) -> ProjectSummary {
        let bucket = |phase: Phase| -> Vec<Feature> {
            self.features
                .iter()
                .filter(|f| f.phase == phase)
                .cloned()
                .collect()
        };

        ProjectSummary {
            project: self.project.clone(),
            features: self.features.clone(),
            phases: PhaseBuckets {
                foundation: bucket(Phase::Foundation),
                core: bucket(Phase::Core),
                advanced: bucket(Phase::Advanced),
            },
            summary: PlanTotals {
                total_features: self.features.len(),
                completed_features: self
                    .features
                    .iter()
                    .filter(|f| f.status == FeatureStatus::Completed)
                    .count(),
                estimated_prompts: self.features.iter().map(|f| f.estimated_prompts).sum(),
            },
        }
    }
}
