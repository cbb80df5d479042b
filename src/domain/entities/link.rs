//! Link entity: a titled URL with a click counter.

use chrono::{DateTime, Utc};

/// A stored link owned by a single user.
///
/// `clicks` only ever grows, one per recorded click.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub clicks: i64,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        title: String,
        url: String,
        clicks: i64,
        owner_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            url,
            clicks,
            owner_id,
            created_at,
        }
    }
}

/// Input data for creating a new link. The click counter always starts at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub title: String,
    pub url: String,
    pub owner_id: String,
}

/// Aggregate counters over one owner's links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkSummary {
    pub links: usize,
    pub clicks: i64,
}

impl LinkSummary {
    /// Sums link and click counts.
    pub fn from_links(links: &[Link]) -> Self {
        Self {
            links: links.len(),
            clicks: links.iter().map(|l| l.clicks).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(id: i64, clicks: i64) -> Link {
        Link::new(
            id,
            format!("Link {id}"),
            "https://example.com".to_string(),
            clicks,
            "owner".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "Blog".to_string(),
            "https://blog.example.com".to_string(),
            0,
            "owner-1".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.title, "Blog");
        assert_eq!(link.url, "https://blog.example.com");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.owner_id, "owner-1");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_summary_from_links() {
        let summary = LinkSummary::from_links(&[link(1, 3), link(2, 0), link(3, 7)]);

        assert_eq!(summary.links, 3);
        assert_eq!(summary.clicks, 10);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(LinkSummary::from_links(&[]), LinkSummary::default());
    }
}
