//! Keep domain service

use super::{
    entity::{Keep, KeepError},
    repository::KeepRepository,
    value_object::{KeepFilter, MatchMode},
};
use tracing::debug;

/// Confirmation returned by a successful delete
pub const DELETE_CONFIRMATION: &str = "Successfully Deleted";

/// Service mediating between the HTTP-facing interfaces and keep
/// persistence: filtering and search, privacy-gated retrieval with view
/// counting, and create/edit/delete orchestration.
pub struct KeepService {
    repository: Box<dyn KeepRepository>,
    match_mode: MatchMode,
}

impl KeepService {
    /// Create a service over the given repository, matching filter terms
    /// case-insensitively
    pub fn new(repository: Box<dyn KeepRepository>) -> Self {
        Self {
            repository,
            match_mode: MatchMode::default(),
        }
    }

    /// Select how filter terms compare against keep text
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// List all keeps exactly as supplied by the repository
    pub async fn get(&self) -> Result<Vec<Keep>, KeepError> {
        self.repository.get().await
    }

    /// List keeps matching a raw filter string
    ///
    /// An empty or absent filter is the identity: the repository's
    /// sequence is returned untouched. Otherwise the filter is split on
    /// `&` into percent-decoded terms and a keep is retained when any
    /// term is a substring of its name or description. Source order is
    /// preserved; no term matching anything yields an empty list.
    pub async fn get_filtered(&self, filter: Option<&str>) -> Result<Vec<Keep>, KeepError> {
        let keeps = self.get().await?;
        let Some(filter) = filter.and_then(|f| KeepFilter::parse(f, self.match_mode)) else {
            return Ok(keeps);
        };
        debug!(terms = filter.terms().len(), "filtering keeps");
        Ok(keeps
            .into_iter()
            .filter(|keep| filter.matches(keep))
            .collect())
    }

    /// List private keeps as supplied by the repository
    pub async fn get_private(&self) -> Result<Vec<Keep>, KeepError> {
        self.repository.get_private().await
    }

    /// Get a single public keep, counting the retrieval as a view
    ///
    /// Private keeps are never retrievable through this path. The view
    /// increment lands on the returned value; whether the repository
    /// persists it is the adapter's concern.
    pub async fn get_by_id(&self, id: i64) -> Result<Keep, KeepError> {
        let mut keep = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(KeepError::NotFound(id))?;
        if keep.is_private {
            return Err(KeepError::Forbidden(id));
        }
        keep.record_view();
        Ok(keep)
    }

    /// Store a new keep, returning it with its assigned id
    pub async fn create(&self, keep: Keep) -> Result<Keep, KeepError> {
        let created = self.repository.create(&keep).await?;
        debug!(id = created.id, "created keep");
        Ok(created)
    }

    /// Replace an existing keep
    ///
    /// Returns the supplied keep as the authoritative post-edit state
    /// rather than a re-fetched copy.
    pub async fn edit(&self, keep: Keep) -> Result<Keep, KeepError> {
        self.repository
            .get_by_id(keep.id)
            .await?
            .ok_or(KeepError::NotFound(keep.id))?;
        self.repository.edit(&keep).await?;
        debug!(id = keep.id, "edited keep");
        Ok(keep)
    }

    /// Remove a keep by id
    pub async fn delete(&self, id: i64) -> Result<&'static str, KeepError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(KeepError::NotFound(id))?;
        self.repository.delete(id).await?;
        debug!(id, "deleted keep");
        Ok(DELETE_CONFIRMATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryKeepRepository;

    fn sample_keeps() -> Vec<Keep> {
        vec![
            Keep::new("newKeep1".to_string(), "it's a keep".to_string()),
            Keep::new("newKeep2".to_string(), String::new()),
        ]
    }

    async fn service_with(keeps: Vec<Keep>) -> KeepService {
        let repository = InMemoryKeepRepository::new();
        for keep in keeps {
            repository.create(&keep).await.unwrap();
        }
        KeepService::new(Box::new(repository))
    }

    #[tokio::test]
    async fn get_returns_repository_sequence() {
        let service = service_with(vec![]).await;
        assert!(service.get().await.unwrap().is_empty());

        let service = service_with(sample_keeps()).await;
        let result = service.get().await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "newKeep1");
        assert_eq!(result[1].name, "newKeep2");
    }

    #[tokio::test]
    async fn get_filtered_without_filter_is_identity() {
        let service = service_with(sample_keeps()).await;

        for filter in [None, Some("")] {
            let result = service.get_filtered(filter).await.unwrap();
            assert_eq!(result.len(), 2);
            assert_eq!(result[0].name, "newKeep1");
            assert_eq!(result[1].name, "newKeep2");
        }
    }

    #[tokio::test]
    async fn get_filtered_matches_name_and_description() {
        let service = service_with(sample_keeps()).await;

        // Full and partial matches against name and description
        for filter in ["newKeep1", "1", "it's a keep", "it's "] {
            let result = service.get_filtered(Some(filter)).await.unwrap();
            assert_eq!(result.len(), 1, "filter {filter:?}");
            assert_eq!(result[0].name, "newKeep1");
        }
    }

    #[tokio::test]
    async fn get_filtered_unions_terms_without_duplicates() {
        let service = service_with(sample_keeps()).await;

        let result = service
            .get_filtered(Some("it's a keep&newkeep2"))
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "newKeep1");
        assert_eq!(result[1].name, "newKeep2");

        // Both terms hit the same keep; it still appears once
        let result = service.get_filtered(Some("newKeep1&keep")).await.unwrap();
        assert_eq!(result[0].name, "newKeep1");
        assert_eq!(
            result.iter().filter(|k| k.name == "newKeep1").count(),
            1
        );
    }

    #[tokio::test]
    async fn get_filtered_without_matches_returns_empty() {
        let service = service_with(sample_keeps()).await;
        let result = service
            .get_filtered(Some("thereAreNoMatches"))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn get_filtered_decodes_percent_encoding() {
        let service = service_with(sample_keeps()).await;
        let result = service.get_filtered(Some("it%27s")).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "newKeep1");
    }

    #[tokio::test]
    async fn get_filtered_empty_description_never_matches() {
        let service = service_with(sample_keeps()).await;
        let result = service.get_filtered(Some("it's")).await.unwrap();
        assert!(result.iter().all(|k| k.name != "newKeep2"));
    }

    #[tokio::test]
    async fn get_filtered_respects_case_sensitive_mode() {
        let repository = InMemoryKeepRepository::new();
        for keep in sample_keeps() {
            repository.create(&keep).await.unwrap();
        }
        let service =
            KeepService::new(Box::new(repository)).with_match_mode(MatchMode::Sensitive);

        assert!(service
            .get_filtered(Some("newkeep2"))
            .await
            .unwrap()
            .is_empty());

        let result = service.get_filtered(Some("newKeep2")).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "newKeep2");
    }

    #[tokio::test]
    async fn get_private_returns_private_subset() {
        let mut private_keep = Keep::new("secret".to_string(), "hidden".to_string());
        private_keep.is_private = true;
        let mut keeps = sample_keeps();
        keeps.push(private_keep);

        let service = service_with(keeps).await;
        let result = service.get_private().await.unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].is_private);
        assert_eq!(result[0].name, "secret");
    }

    #[tokio::test]
    async fn get_by_id_increments_views_once() {
        let service = service_with(sample_keeps()).await;
        let before = service.get().await.unwrap()[0].clone();

        let keep = service.get_by_id(before.id).await.unwrap();
        assert_eq!(keep.id, before.id);
        assert_eq!(keep.views, before.views + 1);
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found() {
        let service = service_with(sample_keeps()).await;
        let err = service.get_by_id(99).await.unwrap_err();
        assert!(matches!(err, KeepError::NotFound(99)));
        assert_eq!(err.to_string(), "Invalid Id");
    }

    #[tokio::test]
    async fn get_by_id_private_is_forbidden() {
        let mut private_keep = Keep::new("secret".to_string(), "hidden".to_string());
        private_keep.is_private = true;
        let service = service_with(vec![private_keep]).await;
        let id = service.get_private().await.unwrap()[0].id;

        let err = service.get_by_id(id).await.unwrap_err();
        assert!(matches!(err, KeepError::Forbidden(_)));
        assert_eq!(err.to_string(), "This Keep Is Private");
    }

    #[tokio::test]
    async fn create_returns_keep_with_assigned_id() {
        let service = service_with(vec![]).await;
        let created = service
            .create(Keep::new("newKeep".to_string(), String::new()))
            .await
            .unwrap();
        assert_ne!(created.id, 0);
        assert_eq!(created.name, "newKeep");
    }

    #[tokio::test]
    async fn edit_returns_supplied_state() {
        let service = service_with(sample_keeps()).await;
        let mut update = service.get().await.unwrap()[0].clone();
        update.update_content(Some("newKeepEdited".to_string()), None);

        let result = service.edit(update.clone()).await.unwrap();
        assert_eq!(result.id, update.id);
        assert_eq!(result.name, "newKeepEdited");
        assert_eq!(result.description, update.description);
    }

    #[tokio::test]
    async fn edit_missing_is_not_found() {
        let service = service_with(vec![]).await;
        let mut keep = Keep::new("ghost".to_string(), String::new());
        keep.id = 42;
        let err = service.edit(keep).await.unwrap_err();
        assert!(matches!(err, KeepError::NotFound(42)));
    }

    #[tokio::test]
    async fn delete_returns_confirmation() {
        let service = service_with(sample_keeps()).await;
        let id = service.get().await.unwrap()[0].id;

        let result = service.delete(id).await.unwrap();
        assert_eq!(result, "Successfully Deleted");
        assert!(matches!(
            service.get_by_id(id).await.unwrap_err(),
            KeepError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let service = service_with(vec![]).await;
        let err = service.delete(7).await.unwrap_err();
        assert!(matches!(err, KeepError::NotFound(7)));
    }
}
