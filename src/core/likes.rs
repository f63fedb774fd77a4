use crate::domain::model::Breed;
use crate::utils::error::{FelineError, Result};
use std::collections::HashMap;

/// Per-breed "liked" flags. Ids outside the breed list are rejected.
#[derive(Debug, Clone, Default)]
pub struct LikeRegistry {
    known: Vec<String>,
    liked: HashMap<String, bool>,
}

impl LikeRegistry {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: ids.into_iter().map(Into::into).collect(),
            liked: HashMap::new(),
        }
    }

    pub fn for_breeds(breeds: &[Breed]) -> Self {
        Self::new(breeds.iter().map(|b| b.id.clone()))
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.known.iter().any(|k| k == id)
    }

    pub fn is_liked(&self, id: &str) -> Result<bool> {
        self.ensure_known(id)?;
        Ok(self.liked.get(id).copied().unwrap_or(false))
    }

    /// Flips the flag for `id` and returns the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        self.ensure_known(id)?;
        let flag = self.liked.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        Ok(*flag)
    }

    /// Liked ids in breed-list order.
    pub fn liked_ids(&self) -> Vec<&str> {
        self.known
            .iter()
            .filter(|id| self.liked.get(id.as_str()).copied().unwrap_or(false))
            .map(String::as_str)
            .collect()
    }

    pub fn liked_count(&self) -> usize {
        self.liked.values().filter(|liked| **liked).count()
    }

    fn ensure_known(&self, id: &str) -> Result<()> {
        if self.is_known(id) {
            Ok(())
        } else {
            Err(FelineError::UnknownBreed { id: id.to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LikeRegistry {
        LikeRegistry::new(["Siamese", "Persian"])
    }

    #[test]
    fn test_nothing_liked_initially() {
        let likes = registry();
        assert!(!likes.is_liked("Siamese").unwrap());
        assert!(!likes.is_liked("Persian").unwrap());
        assert_eq!(likes.liked_count(), 0);
    }

    #[test]
    fn test_toggle_flips_only_that_breed() {
        let mut likes = registry();
        assert!(likes.toggle("Siamese").unwrap());
        assert!(likes.is_liked("Siamese").unwrap());
        assert!(!likes.is_liked("Persian").unwrap());

        assert!(!likes.toggle("Siamese").unwrap());
        assert!(!likes.is_liked("Siamese").unwrap());
    }

    #[test]
    fn test_toggle_parity() {
        let mut likes = registry();
        for n in 1..=9 {
            likes.toggle("Persian").unwrap();
            assert_eq!(likes.is_liked("Persian").unwrap(), n % 2 == 1);
            assert!(!likes.is_liked("Siamese").unwrap());
        }
    }

    #[test]
    fn test_unknown_breed_rejected_without_change() {
        let mut likes = registry();
        likes.toggle("Persian").unwrap();

        let err = likes.toggle("Sphynx").unwrap_err();
        assert!(matches!(err, FelineError::UnknownBreed { ref id } if id == "Sphynx"));
        assert!(likes.is_liked("Sphynx").is_err());
        assert_eq!(likes.liked_ids(), vec!["Persian"]);
    }

    #[test]
    fn test_liked_ids_follow_breed_order() {
        let mut likes = LikeRegistry::new(["Siamese", "Maine Coon", "Bengal"]);
        likes.toggle("Bengal").unwrap();
        likes.toggle("Siamese").unwrap();
        assert_eq!(likes.liked_ids(), vec!["Siamese", "Bengal"]);
        assert_eq!(likes.liked_count(), 2);
    }
}
