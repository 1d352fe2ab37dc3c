//! Novel service: long-form works, fetched by explicit id lists only.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// A novel as stored by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Novel {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub genre: Option<String>,
}

/// Payload for creating a novel.
#[derive(Debug, Clone)]
pub struct NewNovel {
    pub author_id: String,
    pub title: String,
    pub genre: Option<String>,
}

/// Service managing the novel collection.
#[derive(Default)]
pub struct NovelsService {
    novels: RwLock<Vec<Novel>>,
}

impl NovelsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the novels with the given ids. Unknown ids are skipped.
    pub fn get_novels(&self, ids: Vec<String>) -> Vec<Novel> {
        self.novels
            .read()
            .iter()
            .filter(|n| ids.contains(&n.id))
            .cloned()
            .collect()
    }

    /// Create a novel
    pub fn create_novel(&self, new: NewNovel) -> Novel {
        let novel = Novel {
            id: Uuid::new_v4().to_string(),
            author_id: new.author_id,
            title: new.title,
            genre: new.genre,
        };
        self.novels.write().push(novel.clone());
        info!(novel_id = %novel.id, author_id = %novel.author_id, "Novel created");
        novel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_novels_by_ids() {
        let svc = NovelsService::new();
        let a = svc.create_novel(NewNovel {
            author_id: "1".into(),
            title: "North and South".into(),
            genre: Some("social novel".into()),
        });
        let _b = svc.create_novel(NewNovel {
            author_id: "1".into(),
            title: "Cranford".into(),
            genre: None,
        });

        let found = svc.get_novels(vec![a.id.clone(), "missing".into()]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "North and South");
    }
}
