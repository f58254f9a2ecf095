//! Repair job service

use std::sync::Arc;

use chrono::Utc;
use log::info;
use validator::Validate;

use crate::domain::{
    DomainError, DomainResult, NewRepairJob, RepairJob, RepairJobUpdate, RepairStatus,
};
use crate::infrastructure::storage::{keys, Mutation, RecordStore};

/// Service for repair jobs
pub struct RepairService {
    store: Arc<RecordStore>,
}

impl RepairService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<RepairJob> {
        self.store.load(keys::REPAIRS).await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<RepairJob> {
        self.get_all().await.into_iter().find(|r| r.id == id)
    }

    pub async fn get_by_customer(&self, customer_id: &str) -> Vec<RepairJob> {
        self.get_all()
            .await
            .into_iter()
            .filter(|r| r.customer_id == customer_id)
            .collect()
    }

    pub async fn create(&self, input: NewRepairJob) -> DomainResult<RepairJob> {
        input
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let job = RepairJob::new(input);
        let created = self
            .store
            .mutate::<RepairJob, _, _>(keys::REPAIRS, |repairs| {
                repairs.push(job.clone());
                Mutation::Commit(job)
            })
            .await?;

        info!(
            "Opened repair job {} for customer {}",
            created.id, created.customer_id
        );
        Ok(created)
    }

    /// Shallow-merge `patch` into the stored record and restamp
    /// `updated_at`. A patch that moves the status to Completed also
    /// stamps `completed_at`, same as [`set_status`](Self::set_status).
    /// Returns `Ok(None)` when the id is unknown; the collection is left
    /// untouched in that case.
    pub async fn update(
        &self,
        id: &str,
        patch: RepairJobUpdate,
    ) -> DomainResult<Option<RepairJob>> {
        self.store
            .mutate::<RepairJob, _, _>(keys::REPAIRS, |repairs| {
                match repairs.iter_mut().find(|r| r.id == id) {
                    Some(job) => {
                        let status = patch.status;
                        job.apply(patch);
                        job.updated_at = Utc::now();
                        if status == Some(RepairStatus::Completed) {
                            job.completed_at = Some(job.updated_at);
                        }
                        Mutation::Commit(Some(job.clone()))
                    }
                    None => Mutation::Skip(None),
                }
            })
            .await
    }

    /// Set the status without checking the workflow - administrative
    /// override. Stamps `completed_at` when the new status is Completed.
    pub async fn set_status(
        &self,
        id: &str,
        status: RepairStatus,
    ) -> DomainResult<Option<RepairJob>> {
        self.store
            .mutate::<RepairJob, _, _>(keys::REPAIRS, |repairs| {
                match repairs.iter_mut().find(|r| r.id == id) {
                    Some(job) => {
                        Self::apply_status(job, status);
                        Mutation::Commit(Some(job.clone()))
                    }
                    None => Mutation::Skip(None),
                }
            })
            .await
    }

    /// Like [`set_status`](Self::set_status), but rejects steps outside the
    /// intended pending -> in-progress -> completed -> delivered workflow
    /// (cancellation allowed from pending or in-progress).
    pub async fn transition(
        &self,
        id: &str,
        status: RepairStatus,
    ) -> DomainResult<Option<RepairJob>> {
        let updated = self
            .store
            .mutate::<RepairJob, _, _>(keys::REPAIRS, |repairs| {
                match repairs.iter_mut().find(|r| r.id == id) {
                    Some(job) => {
                        if !job.status.can_transition_to(status) {
                            return Mutation::Skip(Err(DomainError::InvalidTransition {
                                from: job.status,
                                to: status,
                            }));
                        }
                        Self::apply_status(job, status);
                        Mutation::Commit(Ok(Some(job.clone())))
                    }
                    None => Mutation::Skip(Ok(None)),
                }
            })
            .await??;

        if let Some(job) = &updated {
            info!("Repair job {} moved to {}", job.id, job.status);
        }
        Ok(updated)
    }

    fn apply_status(job: &mut RepairJob, status: RepairStatus) {
        let now = Utc::now();
        job.status = status;
        job.updated_at = now;
        if status == RepairStatus::Completed {
            job.completed_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::storage::InMemoryMedium;

    fn service() -> RepairService {
        let store = Arc::new(RecordStore::new(Arc::new(InMemoryMedium::new())));
        RepairService::new(store)
    }

    fn new_job(customer_id: &str) -> NewRepairJob {
        NewRepairJob {
            customer_id: customer_id.to_string(),
            device_id: "d1".to_string(),
            description: "cracked screen".to_string(),
            estimated_cost: "150.00".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_starts_pending_with_stamps() {
        let svc = service();
        let job = svc.create(new_job("c1")).await.unwrap();

        assert_eq!(job.status, RepairStatus::Pending);
        assert_eq!(job.created_at, job.updated_at);
        assert!(job.completed_at.is_none());
        assert!(job.actual_cost.is_none());
    }

    #[tokio::test]
    async fn test_get_by_customer_filters() {
        let svc = service();
        svc.create(new_job("c1")).await.unwrap();
        svc.create(new_job("c2")).await.unwrap();

        assert_eq!(svc.get_by_customer("c1").await.len(), 1);
        assert!(svc.get_by_customer("c3").await.is_empty());
    }

    #[tokio::test]
    async fn test_update_restamps_updated_at() {
        let svc = service();
        let job = svc.create(new_job("c1")).await.unwrap();

        let updated = svc
            .update(
                &job.id,
                RepairJobUpdate {
                    technician_notes: Some("battery also swollen".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            updated.technician_notes.as_deref(),
            Some("battery also swollen")
        );
        assert!(updated.updated_at >= job.updated_at);
        assert_eq!(updated.description, job.description);
    }

    #[tokio::test]
    async fn test_update_to_completed_stamps_completed_at() {
        let svc = service();
        let job = svc.create(new_job("c1")).await.unwrap();

        let updated = svc
            .update(
                &job.id,
                RepairJobUpdate {
                    status: Some(RepairStatus::Completed),
                    actual_cost: Some("80.00".parse().unwrap()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, RepairStatus::Completed);
        assert!(updated.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_transition_follows_workflow() {
        let svc = service();
        let job = svc.create(new_job("c1")).await.unwrap();

        svc.transition(&job.id, RepairStatus::InProgress)
            .await
            .unwrap();
        let completed = svc
            .transition(&job.id, RepairStatus::Completed)
            .await
            .unwrap()
            .unwrap();
        assert!(completed.completed_at.is_some());

        let delivered = svc
            .transition(&job.id, RepairStatus::Delivered)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(delivered.status, RepairStatus::Delivered);
    }

    #[tokio::test]
    async fn test_transition_rejects_skipped_steps() {
        let svc = service();
        let job = svc.create(new_job("c1")).await.unwrap();

        let err = svc
            .transition(&job.id, RepairStatus::Delivered)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));

        // record unchanged
        let stored = svc.get_by_id(&job.id).await.unwrap();
        assert_eq!(stored.status, RepairStatus::Pending);
    }

    #[tokio::test]
    async fn test_set_status_allows_any_step() {
        let svc = service();
        let job = svc.create(new_job("c1")).await.unwrap();

        let jumped = svc
            .set_status(&job.id, RepairStatus::Delivered)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(jumped.status, RepairStatus::Delivered);
    }

    #[tokio::test]
    async fn test_transition_missing_id_returns_none() {
        let svc = service();
        let result = svc
            .transition("missing", RepairStatus::InProgress)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
