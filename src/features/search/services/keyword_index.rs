use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::features::categories::models::{Category, Keyword};

/// A category or keyword row that cannot be indexed.
///
/// Raised at build time so bad rows fail the rebuild loudly instead of
/// silently corrupting search results. The previous index snapshot stays in
/// service when a build fails.
#[derive(Debug, Error)]
pub enum MalformedRecord {
    #[error("keyword {id} of category {category_id} is empty after normalization")]
    EmptyKeyword { id: Uuid, category_id: Uuid },

    #[error("keyword {id} ({keyword:?}) references unknown category {category_id}")]
    OrphanKeyword {
        id: Uuid,
        keyword: String,
        category_id: Uuid,
    },

    #[error("category {id} ({name:?}) references unknown parent {parent_id}")]
    UnknownParent {
        id: Uuid,
        name: String,
        parent_id: Uuid,
    },

    #[error("category {id} ({name:?}) is nested deeper than two levels")]
    NestedParent { id: Uuid, name: String },
}

/// How a single query token matched one category
#[derive(Debug, Clone, Copy)]
pub struct TokenMatch {
    pub category_id: Uuid,
    pub exact_keyword: bool,
    pub exact_name: bool,
    pub substring: bool,
}

impl TokenMatch {
    fn new(category_id: Uuid) -> Self {
        Self {
            category_id,
            exact_keyword: false,
            exact_name: false,
            substring: false,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.exact_keyword || self.exact_name
    }
}

/// Canonicalize text for comparison: lowercase, trim, collapse whitespace.
///
/// Applied identically to stored keywords, stored names and query input.
/// Idempotent. No stemming, no edit-distance.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Immutable in-memory index over the category and keyword data set.
///
/// Built once from a full table load and shared read-only between request
/// handlers; rebuilds construct a fresh index and swap the shared reference.
#[derive(Debug)]
pub struct KeywordIndex {
    categories: HashMap<Uuid, Arc<Category>>,
    // normalized keyword -> owning category ids (same keyword may map to several)
    exact_keywords: HashMap<String, Vec<Uuid>>,
    // flat scan tables for substring matching; the vocabulary is curated and
    // small (a few thousand entries) so a linear pass is plenty
    keyword_entries: Vec<(String, Uuid)>,
    name_entries: Vec<(String, Uuid)>,
    // explicit two-level tree: root category id -> child ids, name-ordered
    children: HashMap<Uuid, Vec<Uuid>>,
    keyword_count: usize,
}

impl KeywordIndex {
    /// Build an index from the full category and keyword data set.
    ///
    /// An empty data set produces an empty, queryable index. Malformed rows
    /// fail the whole build.
    pub fn build(
        categories: Vec<Category>,
        keywords: Vec<Keyword>,
    ) -> Result<KeywordIndex, MalformedRecord> {
        let categories: HashMap<Uuid, Arc<Category>> = categories
            .into_iter()
            .map(|c| (c.id, Arc::new(c)))
            .collect();

        let mut children: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for category in categories.values() {
            let Some(parent_id) = category.parent_category_id else {
                continue;
            };
            let parent =
                categories
                    .get(&parent_id)
                    .ok_or_else(|| MalformedRecord::UnknownParent {
                        id: category.id,
                        name: category.name.clone(),
                        parent_id,
                    })?;
            // Tree depth is capped at two levels; a parent with its own parent
            // (including self-references) cannot be indexed.
            if parent.parent_category_id.is_some() {
                return Err(MalformedRecord::NestedParent {
                    id: category.id,
                    name: category.name.clone(),
                });
            }
            children.entry(parent_id).or_default().push(category.id);
        }
        for child_ids in children.values_mut() {
            child_ids.sort_by_key(|id| normalize(&categories[id].name));
        }

        let mut exact_keywords: HashMap<String, Vec<Uuid>> = HashMap::new();
        let mut keyword_entries = Vec::with_capacity(keywords.len());
        let mut seen: HashSet<(String, Uuid)> = HashSet::new();
        let keyword_count = keywords.len();
        for kw in keywords {
            if !categories.contains_key(&kw.category_id) {
                return Err(MalformedRecord::OrphanKeyword {
                    id: kw.id,
                    keyword: kw.keyword,
                    category_id: kw.category_id,
                });
            }
            let normalized = normalize(&kw.keyword);
            if normalized.is_empty() {
                return Err(MalformedRecord::EmptyKeyword {
                    id: kw.id,
                    category_id: kw.category_id,
                });
            }
            // distinct raw keywords can normalize to the same token
            if !seen.insert((normalized.clone(), kw.category_id)) {
                continue;
            }
            exact_keywords
                .entry(normalized.clone())
                .or_default()
                .push(kw.category_id);
            keyword_entries.push((normalized, kw.category_id));
        }

        let name_entries = categories
            .values()
            .map(|c| (normalize(&c.name), c.id))
            .collect();

        Ok(KeywordIndex {
            categories,
            exact_keywords,
            keyword_entries,
            name_entries,
            children,
            keyword_count,
        })
    }

    /// Match one normalized token against keywords and category names.
    ///
    /// Returns at most one entry per category, regardless of how many paths
    /// the token matched it through.
    pub fn lookup(&self, token: &str) -> Vec<TokenMatch> {
        let mut matches: HashMap<Uuid, TokenMatch> = HashMap::new();

        if let Some(ids) = self.exact_keywords.get(token) {
            for &id in ids {
                matches
                    .entry(id)
                    .or_insert_with(|| TokenMatch::new(id))
                    .exact_keyword = true;
            }
        }

        for (keyword, id) in &self.keyword_entries {
            if keyword != token && keyword.contains(token) {
                matches
                    .entry(*id)
                    .or_insert_with(|| TokenMatch::new(*id))
                    .substring = true;
            }
        }

        for m in self.lookup_names(token) {
            let entry = matches
                .entry(m.category_id)
                .or_insert_with(|| TokenMatch::new(m.category_id));
            entry.exact_name |= m.exact_name;
            entry.substring |= m.substring;
        }

        matches.into_values().collect()
    }

    /// Match one normalized token against category names only.
    ///
    /// Used for the full multi-word query so names like "eye drops" match as
    /// a unit.
    pub fn lookup_names(&self, token: &str) -> Vec<TokenMatch> {
        let mut matches = Vec::new();
        for (name, id) in &self.name_entries {
            let mut m = TokenMatch::new(*id);
            if name == token {
                m.exact_name = true;
            } else if name.contains(token) {
                m.substring = true;
            } else {
                continue;
            }
            matches.push(m);
        }
        matches
    }

    pub fn category(&self, id: Uuid) -> Option<&Arc<Category>> {
        self.categories.get(&id)
    }

    /// Child ids of a root category, ordered by normalized name
    #[allow(dead_code)]
    pub fn children_of(&self, parent_id: Uuid) -> &[Uuid] {
        self.children
            .get(&parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(name: &str, requires_seal: bool) -> Category {
        let now = Utc::now();
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: normalize(name).replace(' ', "-"),
            description: None,
            requires_seal,
            regulation_code: None,
            regulation_name: None,
            regulation_summary: None,
            seal_types: None,
            seal_description: None,
            what_to_do: None,
            parent_category_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn keyword(category_id: Uuid, text: &str) -> Keyword {
        Keyword {
            id: Uuid::new_v4(),
            category_id,
            keyword: text.to_string(),
        }
    }

    #[test]
    fn test_normalize_lowercases_trims_and_collapses() {
        assert_eq!(normalize("  Eye   Drops  "), "eye drops");
        assert_eq!(normalize("TYLENOL"), "tylenol");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("  Eye   Drops  ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_build_empty_data_set() {
        let index = KeywordIndex::build(Vec::new(), Vec::new()).unwrap();
        assert_eq!(index.category_count(), 0);
        assert!(index.lookup("tylenol").is_empty());
        assert!(index.lookup_names("tylenol").is_empty());
    }

    #[test]
    fn test_lookup_exact_keyword() {
        let cat = category("OTC Pain Relievers", true);
        let id = cat.id;
        let keywords = vec![keyword(id, "Tylenol"), keyword(id, "advil")];
        let index = KeywordIndex::build(vec![cat], keywords).unwrap();

        let matches = index.lookup("tylenol");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category_id, id);
        assert!(matches[0].exact_keyword);
        assert!(!matches[0].exact_name);
    }

    #[test]
    fn test_lookup_deduplicates_by_category() {
        // token matches the same category via two keywords and the name
        let cat = category("drops", true);
        let id = cat.id;
        let keywords = vec![keyword(id, "eye drops"), keyword(id, "ear drops")];
        let index = KeywordIndex::build(vec![cat], keywords).unwrap();

        let matches = index.lookup("drops");
        assert_eq!(matches.len(), 1);
        assert!(matches[0].exact_name);
        assert!(matches[0].substring);
    }

    #[test]
    fn test_lookup_substring_against_name() {
        let cat = category("Eye Drops", true);
        let id = cat.id;
        let index = KeywordIndex::build(vec![cat], Vec::new()).unwrap();

        let matches = index.lookup("drops");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category_id, id);
        assert!(!matches[0].is_exact());
        assert!(matches[0].substring);
    }

    #[test]
    fn test_same_keyword_maps_to_multiple_categories() {
        let a = category("Cough Syrup", true);
        let b = category("Cold Medicine", true);
        let keywords = vec![keyword(a.id, "syrup"), keyword(b.id, "syrup")];
        let index = KeywordIndex::build(vec![a, b], keywords).unwrap();

        let matches = index.lookup("syrup");
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.exact_keyword));
    }

    #[test]
    fn test_build_rejects_empty_keyword() {
        let cat = category("Vitamins", true);
        let id = cat.id;
        let err = KeywordIndex::build(vec![cat], vec![keyword(id, "   ")]).unwrap_err();
        assert!(matches!(err, MalformedRecord::EmptyKeyword { .. }));
    }

    #[test]
    fn test_build_rejects_orphan_keyword() {
        let err =
            KeywordIndex::build(Vec::new(), vec![keyword(Uuid::new_v4(), "tylenol")]).unwrap_err();
        assert!(matches!(err, MalformedRecord::OrphanKeyword { .. }));
    }

    #[test]
    fn test_build_rejects_unknown_parent() {
        let mut cat = category("Eye Drops", true);
        cat.parent_category_id = Some(Uuid::new_v4());
        let err = KeywordIndex::build(vec![cat], Vec::new()).unwrap_err();
        assert!(matches!(err, MalformedRecord::UnknownParent { .. }));
    }

    #[test]
    fn test_build_rejects_three_level_nesting() {
        let root = category("Medicine", true);
        let mut mid = category("OTC", true);
        mid.parent_category_id = Some(root.id);
        let mut leaf = category("Pain Relievers", true);
        leaf.parent_category_id = Some(mid.id);

        let err = KeywordIndex::build(vec![root, mid, leaf], Vec::new()).unwrap_err();
        assert!(matches!(err, MalformedRecord::NestedParent { .. }));
    }

    #[test]
    fn test_children_index_ordered_by_name() {
        let root = category("Medicine", true);
        let root_id = root.id;
        let mut zinc = category("Zinc Lozenges", true);
        zinc.parent_category_id = Some(root_id);
        let zinc_id = zinc.id;
        let mut aspirin = category("Aspirin", true);
        aspirin.parent_category_id = Some(root_id);
        let aspirin_id = aspirin.id;

        let index = KeywordIndex::build(vec![root, zinc, aspirin], Vec::new()).unwrap();
        assert_eq!(index.children_of(root_id), &[aspirin_id, zinc_id]);
        assert!(index.children_of(aspirin_id).is_empty());
    }
}
