use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::plan::{FeaturePlan, PlanError};
use crate::models::feature::Project;

/// Process-lifetime registry of feature plans. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    plans: Arc<RwLock<HashMap<Uuid, FeaturePlan>>>,
}

impl PlanStore {
    pub async fn create(&self, project: Project) -> Uuid {
        let id = Uuid::new_v4();
        self.plans.write().await.insert(id, FeaturePlan::new(project));
        id
    }

    pub async fn read<T>(&self, id: Uuid, f: impl FnOnce(&FeaturePlan) -> T) -> Result<T, PlanError> {
        let plans = self.plans.read().await;
        let plan = plans.get(&id).ok_or(PlanError::PlanNotFound(id))?;
        Ok(f(plan))
    }

    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut FeaturePlan) -> Result<T, PlanError>,
    ) -> Result<T, PlanError> {
        let mut plans = self.plans.write().await;
        let plan = plans.get_mut(&id).ok_or(PlanError::PlanNotFound(id))?;
        f(plan)
    }

    /// Drops a plan and everything in it.
    pub async fn remove(&self, id: Uuid) -> Result<(), PlanError> {
        self.plans
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(PlanError::PlanNotFound(id))
    }
}
