//! Link listing, creation, and click recording.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkSummary, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for an owner's links.
///
/// The owner is always passed in by the caller; this service never assumes
/// a particular user.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns all links of an owner, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_by_owner(owner_id).await
    }

    /// Creates a link with a zero click counter.
    ///
    /// Title and URL are stored as given; they only have to contain something
    /// other than whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title or URL is blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(
        &self,
        owner_id: &str,
        title: String,
        url: String,
    ) -> Result<Link, AppError> {
        if title.trim().is_empty() || url.trim().is_empty() {
            return Err(AppError::bad_request(
                "Title and URL are required.",
                json!({ "title": title, "url": url }),
            ));
        }

        let new_link = NewLink {
            title,
            url,
            owner_id: owner_id.to_string(),
        };

        self.link_repository.create(new_link).await
    }

    /// Records one click on a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner has no link with this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_click(&self, owner_id: &str, link_id: i64) -> Result<(), AppError> {
        let updated = self
            .link_repository
            .increment_clicks(link_id, owner_id)
            .await?;

        if !updated {
            return Err(AppError::not_found(
                "Link not found",
                json!({ "id": link_id }),
            ));
        }

        tracing::debug!(link_id, owner_id, "Click recorded");

        Ok(())
    }

    /// Counts links and total clicks of an owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn summary(&self, owner_id: &str) -> Result<LinkSummary, AppError> {
        let links = self.link_repository.list_by_owner(owner_id).await?;
        Ok(LinkSummary::from_links(&links))
    }
}
