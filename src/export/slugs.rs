// src/export/slugs.rs
use crate::constants::DUPLICATE_SLUG_SUFFIX;
use std::collections::HashSet;

/// Slugs already handed out in this run.
///
/// Append-only; one registry lives exactly as long as one export.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    taken: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `slug` and returns the unique form actually assigned.
    ///
    /// Parentheses are dropped first. A taken slug gets `-dup` appended
    /// until it is free, so a third `intro` becomes `intro-dup-dup`.
    pub fn claim(&mut self, slug: &str) -> String {
        let mut candidate: String = slug.chars().filter(|c| !matches!(c, '(' | ')')).collect();
        while self.taken.contains(&candidate) {
            candidate.push_str(DUPLICATE_SLUG_SUFFIX);
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.taken.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_gets_dup_suffix() {
        let mut slugs = SlugRegistry::new();
        assert_eq!(slugs.claim("intro"), "intro");
        assert_eq!(slugs.claim("intro"), "intro-dup");
        assert_eq!(slugs.claim("intro"), "intro-dup-dup");
        assert_eq!(slugs.len(), 3);
    }

    #[test]
    fn parentheses_are_stripped_before_lookup() {
        let mut slugs = SlugRegistry::new();
        assert_eq!(slugs.claim("api-(v2)"), "api-v2");
        assert_eq!(slugs.claim("api-v2"), "api-v2-dup");
        assert!(slugs.contains("api-v2"));
    }
}
