use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::features::categories::models::Category;
use crate::features::search::services::keyword_index::{normalize, KeywordIndex, TokenMatch};

// Scoring weights, summed per query token. Starting policy, tunable; the
// ordering guarantees (exact above substring-only, keyword hits above bare
// name hits) must survive any retuning.
const WEIGHT_EXACT: u32 = 3;
const WEIGHT_KEYWORD_BONUS: u32 = 2;
const WEIGHT_SUBSTRING: u32 = 1;

/// One ranked search result
#[derive(Debug, Clone)]
pub struct ScoredCategory {
    pub category: Arc<Category>,
    pub score: u32,
}

/// Rank categories for a raw query string.
///
/// Pure function over the index snapshot: no I/O, no side effects, identical
/// input yields identical ordered output. Minimum-length enforcement belongs
/// to the service boundary; a too-short query here just returns broad results.
pub fn search(index: &KeywordIndex, raw_query: &str) -> Vec<ScoredCategory> {
    let normalized = normalize(raw_query);
    if normalized.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<&str> = normalized.split(' ').collect();

    let mut scores: HashMap<Uuid, u32> = HashMap::new();
    for token in &tokens {
        for m in index.lookup(token) {
            *scores.entry(m.category_id).or_insert(0) += token_points(&m);
        }
    }

    // The unsplit query is scored as its own token so multi-word keywords
    // and names ("eye drops") match as a unit even when the individual
    // tokens land on unrelated categories.
    if tokens.len() > 1 {
        for m in index.lookup(&normalized) {
            *scores.entry(m.category_id).or_insert(0) += token_points(&m);
        }
    }

    let mut results: Vec<ScoredCategory> = scores
        .into_iter()
        .filter_map(|(id, score)| {
            index.category(id).map(|category| ScoredCategory {
                category: Arc::clone(category),
                score,
            })
        })
        .collect();

    // Ties: seal-requiring categories first (more actionable to a
    // safety-seeking user), then name order for reproducible output.
    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.category.requires_seal.cmp(&a.category.requires_seal))
            .then_with(|| normalize(&a.category.name).cmp(&normalize(&b.category.name)))
    });

    results
}

fn token_points(m: &TokenMatch) -> u32 {
    if m.is_exact() {
        // Exact keyword hits outrank bare name hits.
        let bonus = if m.exact_keyword && !m.exact_name {
            WEIGHT_KEYWORD_BONUS
        } else {
            0
        };
        WEIGHT_EXACT + bonus
    } else if m.substring {
        WEIGHT_SUBSTRING
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::Keyword;
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

    fn build(categories: Vec<Category>, keywords: Vec<Keyword>) -> KeywordIndex {
        KeywordIndex::build(categories, keywords).unwrap()
    }

    #[test]
    fn test_exact_keyword_returns_owning_category() {
        let mut cat = category("OTC Pain Relievers", true);
        cat.regulation_code = Some("21 CFR 211.132".to_string());
        let id = cat.id;
        let index = build(
            vec![cat],
            vec![
                keyword(id, "tylenol"),
                keyword(id, "advil"),
                keyword(id, "ibuprofen"),
            ],
        );

        let results = search(&index, "tylenol");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category.id, id);
        assert!(results[0].category.requires_seal);
        assert_eq!(
            results[0].category.regulation_code.as_deref(),
            Some("21 CFR 211.132")
        );
    }

    #[test]
    fn test_exact_match_scores_above_substring_match() {
        let exact = category("Cough Syrup", true);
        let exact_id = exact.id;
        let partial = category("Syrupy Drinks", true);
        let index = build(
            vec![exact, partial],
            vec![keyword(exact_id, "syrup")],
        );

        let results = search(&index, "syrup");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].category.id, exact_id);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_search_is_case_and_whitespace_insensitive() {
        let cat = category("OTC Pain Relievers", true);
        let id = cat.id;
        let index = build(vec![cat], vec![keyword(id, "tylenol")]);

        let upper = search(&index, "TYLENOL");
        let lower = search(&index, "tylenol");
        let padded = search(&index, "  tylenol  ");

        let ids = |rs: &[ScoredCategory]| rs.iter().map(|r| r.category.id).collect::<Vec<_>>();
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&lower), ids(&padded));
    }

    #[test]
    fn test_multi_word_name_matches_as_unit() {
        let eye = category("Eye Drops", true);
        let eye_id = eye.id;
        let index = build(vec![eye], vec![keyword(eye_id, "eye drops")]);

        let results = search(&index, "eye drops");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category.id, eye_id);

        // single token only reaches the category through substring overlap
        let partial = search(&index, "drops");
        assert_eq!(partial.len(), 1);
        assert!(partial[0].score < results[0].score);
    }

    #[test]
    fn test_multi_word_keyword_owner_beats_substring_name() {
        // the category owning the exact keyword must outrank one whose name
        // merely contains the phrase
        let owner = category("Ophthalmic Solutions", true);
        let owner_id = owner.id;
        let bystander = category("Super Eye Drops Plus", true);
        let index = build(vec![owner, bystander], vec![keyword(owner_id, "eye drops")]);

        let results = search(&index, "eye drops");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].category.id, owner_id);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_no_duplicates_when_matched_via_multiple_paths() {
        // name and two keywords all contain the token
        let cat = category("Eye Drops", true);
        let id = cat.id;
        let index = build(
            vec![cat],
            vec![keyword(id, "eye drops"), keyword(id, "lubricant drops")],
        );

        let results = search(&index, "drops");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category.id, id);
    }

    #[test]
    fn test_more_matching_tokens_rank_higher() {
        let both = category("Cold and Flu", true);
        let both_id = both.id;
        let one = category("Allergy Relief", true);
        let one_id = one.id;
        let index = build(
            vec![both, one],
            vec![
                keyword(both_id, "cold"),
                keyword(both_id, "flu"),
                keyword(one_id, "flu"),
            ],
        );

        let results = search(&index, "cold flu");
        assert_eq!(results[0].category.id, both_id);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_tie_break_prefers_seal_requirement() {
        // equal scores; the seal flag dominates the name order
        let seal_yes = category("Zzz Sleep Aid", true);
        let seal_no = category("Aaa Drink Mix", false);
        let (yes_id, no_id) = (seal_yes.id, seal_no.id);
        let index = build(
            vec![seal_yes, seal_no],
            vec![keyword(yes_id, "powder"), keyword(no_id, "powder")],
        );

        let results = search(&index, "powder");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[0].category.id, yes_id);
        assert_eq!(results[1].category.id, no_id);
    }

    #[test]
    fn test_tie_break_falls_back_to_name_order() {
        let tied_a = category("Lip Balm", false);
        let tied_b = category("Cough Drops", false);
        let (a_id, b_id) = (tied_a.id, tied_b.id);
        let index = build(
            vec![tied_a, tied_b],
            vec![keyword(a_id, "balm"), keyword(b_id, "balm")],
        );

        let results = search(&index, "balm");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, results[1].score);
        // equal score and seal flag: lexically earlier name first
        assert_eq!(results[0].category.id, b_id);
        assert_eq!(results[1].category.id, a_id);
    }

    #[test]
    fn test_search_is_deterministic() {
        let a = category("Eye Drops", true);
        let b = category("Ear Drops", true);
        let c = category("Nose Drops", false);
        let keywords = vec![
            keyword(a.id, "drops"),
            keyword(b.id, "drops"),
            keyword(c.id, "drops"),
        ];
        let index = build(vec![a, b, c], keywords);

        let first: Vec<Uuid> = search(&index, "drops")
            .iter()
            .map(|r| r.category.id)
            .collect();
        for _ in 0..10 {
            let again: Vec<Uuid> = search(&index, "drops")
                .iter()
                .map(|r| r.category.id)
                .collect();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_no_match_returns_empty() {
        let cat = category("Vitamins", true);
        let id = cat.id;
        let index = build(vec![cat], vec![keyword(id, "multivitamin")]);

        assert!(search(&index, "xyzzyqux").is_empty());
        assert!(search(&index, "   ").is_empty());
    }

    #[test]
    fn test_empty_index_returns_empty() {
        let index = build(Vec::new(), Vec::new());
        assert!(search(&index, "tylenol").is_empty());
    }
}
