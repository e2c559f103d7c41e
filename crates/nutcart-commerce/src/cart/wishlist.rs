//! The liked-products set.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Liked product ids in the order they were liked.
///
/// Serializes as a plain JSON list. Duplicates in stored data collapse to
/// their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ProductId>", into = "Vec<ProductId>")]
pub struct LikedSet {
    ids: Vec<ProductId>,
}

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like `id` if absent, unlike it if present. Returns whether it is
    /// liked afterwards.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if let Some(i) = self.ids.iter().position(|x| x == id) {
            self.ids.remove(i);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<ProductId>> for LikedSet {
    fn from(ids: Vec<ProductId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }
}

impl From<LikedSet> for Vec<ProductId> {
    fn from(set: LikedSet) -> Self {
        set.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut liked = LikedSet::from(vec![ProductId::new("1"), ProductId::new("4")]);
        let before = liked.clone();

        assert!(liked.toggle(&ProductId::new("7")));
        assert!(!liked.toggle(&ProductId::new("7")));
        assert_eq!(liked, before);

        assert!(!liked.toggle(&ProductId::new("1")));
        assert!(liked.toggle(&ProductId::new("1")));
        assert!(liked.contains(&ProductId::new("1")));
    }

    #[test]
    fn test_keeps_like_order() {
        let mut liked = LikedSet::new();
        liked.toggle(&ProductId::new("3"));
        liked.toggle(&ProductId::new("1"));
        liked.toggle(&ProductId::new("2"));

        let ids: Vec<&str> = liked.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_serde_as_list() {
        let liked: LikedSet = serde_json::from_str(r#"["2", "5", "2"]"#).unwrap();
        assert_eq!(liked.len(), 2);
        assert_eq!(serde_json::to_string(&liked).unwrap(), r#"["2","5"]"#);
    }
}
