//! Keyword Classifier — matches free text against the keyword dictionary.
//!
//! Default: `KeywordClassifier` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn TextClassifier>` so another backend can be swapped in
//! without touching handlers.
//!
//! Matching works on normalized text (lower-cased, whitespace collapsed):
//! - `exact`    — the text equals a keyword
//! - `contains` — a keyword occurs in the text at word boundaries
//! - `part_of`  — the text (≥2 alphanumerics) occurs inside a longer keyword
//!
//! Ranking: kind (exact > contains > part_of), then specificity (longest keyword for
//! exact/contains, shortest enclosing keyword for part_of), then distinct keyword hits,
//! then dictionary order.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::taxonomy::keywords::KEYWORD_DICTIONARY;

/// Minimum alphanumeric characters before text may match inside a longer keyword.
const MIN_PART_OF_CHARS: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// How a keyword matched. Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    PartOf,
    Contains,
    Exact,
}

/// A category matched by the classifier, with the keyword that won it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatch {
    pub category: &'static str,
    pub matched_keyword: &'static str,
    pub kind: MatchKind,
    /// Distinct keywords of this category that matched.
    pub hits: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait TextClassifier: Send + Sync {
    /// Ranked category matches. Empty when nothing matches; never fails.
    fn classify(&self, text: &str) -> Vec<CategoryMatch>;

    /// Label reported to callers, e.g. `"keyword"`.
    fn backend(&self) -> &'static str;

    /// Top-ranked category, if any.
    fn best(&self, text: &str) -> Option<&'static str> {
        self.classify(text).first().map(|m| m.category)
    }
}

/// Dictionary-backed classifier over the static keyword tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl TextClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Vec<CategoryMatch> {
        classify(text)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword index
// ────────────────────────────────────────────────────────────────────────────

struct IndexedKeyword {
    category_rank: usize,
    category: &'static str,
    keyword: &'static str,
    normalized: String,
    chars: usize,
}

static INDEX: Lazy<Vec<IndexedKeyword>> = Lazy::new(|| {
    let index: Vec<IndexedKeyword> = KEYWORD_DICTIONARY
        .iter()
        .enumerate()
        .flat_map(|(rank, (category, keywords))| {
            keywords.iter().filter_map(move |keyword| {
                let normalized = normalize(keyword);
                (!normalized.is_empty()).then(|| IndexedKeyword {
                    category_rank: rank,
                    category: *category,
                    keyword: *keyword,
                    chars: normalized.chars().count(),
                    normalized,
                })
            })
        })
        .collect();
    debug!(
        "Keyword index built: {} keywords across {} categories",
        index.len(),
        KEYWORD_DICTIONARY.len()
    );
    index
});

/// Lower-cases and collapses whitespace runs to a single space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// ────────────────────────────────────────────────────────────────────────────
// Core matching
// ────────────────────────────────────────────────────────────────────────────

/// True if `needle` occurs in `haystack` with word boundaries on each alphanumeric edge.
///
/// A hyphen between alphanumerics joins a compound word, so `go` does not match in
/// `go-to-market`.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
        return false;
    };
    let needs_left = first.is_alphanumeric();
    let needs_right = last.is_alphanumeric();

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();

        let left_ok = !needs_left || !continues_word(haystack[..start].chars().rev());
        let right_ok = !needs_right || !continues_word(haystack[end..].chars());

        if left_ok && right_ok {
            return true;
        }
        // Occurrences may overlap, so step one character rather than one match.
        from = start + first.len_utf8();
    }
    false
}

/// Whether the characters walking away from a match edge extend the word it sits in.
fn continues_word(mut outward: impl Iterator<Item = char>) -> bool {
    match outward.next() {
        Some(c) if c.is_alphanumeric() => true,
        Some('-') => outward.next().is_some_and(char::is_alphanumeric),
        _ => false,
    }
}

struct Candidate {
    category_rank: usize,
    category: &'static str,
    keyword: &'static str,
    keyword_chars: usize,
    kind: MatchKind,
    hits: u32,
}

/// Kind first, then specificity. Does not look at hits or category order.
fn compare_strength(a: &Candidate, b: &Candidate) -> Ordering {
    b.kind.cmp(&a.kind).then_with(|| match a.kind {
        MatchKind::PartOf => a.keyword_chars.cmp(&b.keyword_chars),
        MatchKind::Contains | MatchKind::Exact => b.keyword_chars.cmp(&a.keyword_chars),
    })
}

fn compare_rank(a: &Candidate, b: &Candidate) -> Ordering {
    compare_strength(a, b)
        .then_with(|| b.hits.cmp(&a.hits))
        .then_with(|| a.category_rank.cmp(&b.category_rank))
}

fn match_kind(text: &str, keyword: &IndexedKeyword, allow_part_of: bool) -> Option<MatchKind> {
    if keyword.normalized == text {
        Some(MatchKind::Exact)
    } else if contains_word(text, &keyword.normalized) {
        Some(MatchKind::Contains)
    } else if allow_part_of
        && keyword.normalized.len() > text.len()
        && contains_word(&keyword.normalized, text)
    {
        Some(MatchKind::PartOf)
    } else {
        None
    }
}

/// Classifies free text against the keyword dictionary. See module docs for the rules.
pub fn classify(text: &str) -> Vec<CategoryMatch> {
    let text = normalize(text);
    if text.is_empty() {
        return vec![];
    }

    let allow_part_of =
        text.chars().filter(|c| c.is_alphanumeric()).count() >= MIN_PART_OF_CHARS;
    let mut slots: Vec<Option<Candidate>> = Vec::new();
    slots.resize_with(KEYWORD_DICTIONARY.len(), || None);

    for keyword in INDEX.iter() {
        let Some(kind) = match_kind(&text, keyword, allow_part_of) else {
            continue;
        };
        let candidate = Candidate {
            category_rank: keyword.category_rank,
            category: keyword.category,
            keyword: keyword.keyword,
            keyword_chars: keyword.chars,
            kind,
            hits: 1,
        };

        match slots[keyword.category_rank].as_mut() {
            Some(current) => {
                let hits = current.hits + 1;
                if compare_strength(&candidate, current) == Ordering::Less {
                    *current = candidate;
                }
                current.hits = hits;
            }
            None => slots[keyword.category_rank] = Some(candidate),
        }
    }

    let mut candidates: Vec<Candidate> = slots.into_iter().flatten().collect();
    candidates.sort_by(compare_rank);

    debug!(
        "Classified {} bytes of text into {} categories",
        text.len(),
        candidates.len()
    );

    candidates
        .into_iter()
        .map(|c| CategoryMatch {
            category: c.category,
            matched_keyword: c.keyword,
            kind: c.kind,
            hits: c.hits,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(text: &str) -> Vec<&'static str> {
        classify(text).into_iter().map(|m| m.category).collect()
    }

    #[test]
    fn test_python_classifies_as_coding() {
        let matches = classify("Python");
        assert!(matches.iter().any(|m| m.category == "coding"));
        assert_eq!(matches[0].kind, MatchKind::Exact);
    }

    #[test]
    fn test_kubernetes_orchestration_classifies_as_containers() {
        assert!(categories("Kubernetes orchestration").contains(&"containers"));
    }

    #[test]
    fn test_nonsense_returns_empty() {
        assert!(classify("some random nonsense xyz123").is_empty());
    }

    #[test]
    fn test_empty_and_blank_input_return_empty() {
        assert!(classify("").is_empty());
        assert!(classify("   \n\t ").is_empty());
    }

    #[test]
    fn test_every_keyword_matches_its_own_category() {
        for (category, keywords) in KEYWORD_DICTIONARY {
            for kw in keywords.iter() {
                let matches = classify(kw);
                let own = matches.iter().find(|m| m.category == *category);
                assert!(own.is_some(), "keyword '{kw}' did not match {category}");
                assert_eq!(own.unwrap().kind, MatchKind::Exact, "keyword '{kw}'");
            }
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let text = "Led a React and Node.js migration to AWS with Terraform";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_go_does_not_match_inside_ego() {
        assert!(!categories("ego").contains(&"coding"));
        assert!(!categories("Diego built things").contains(&"coding"));
        assert!(categories("Go").contains(&"coding"));
        assert!(categories("5 years of Go experience").contains(&"coding"));
    }

    #[test]
    fn test_go_does_not_match_inside_hyphenated_compound() {
        let matches = classify("go-to-market strategy");
        assert!(!matches.iter().any(|m| m.category == "coding"));
        assert_eq!(matches[0].category, "product_strategy");

        let matches = classify("Go-to-market");
        assert_eq!(matches[0].kind, MatchKind::Exact);
        assert!(!matches.iter().any(|m| m.category == "coding"));
    }

    #[test]
    fn test_symbol_edged_keywords_match_without_boundaries() {
        assert!(categories("modern c++17 codebase").contains(&"coding"));
        assert!(categories("ASP.NET Core services").contains(&"backend"));
    }

    #[test]
    fn test_case_and_whitespace_are_normalized() {
        let matches = classify("  Machine \n  LEARNING ");
        assert_eq!(matches[0].category, "machine_learning");
        assert_eq!(matches[0].kind, MatchKind::Exact);
    }

    #[test]
    fn test_exact_match_outranks_contained_keyword() {
        // "ruby on rails" is a backend keyword; "ruby" alone is a coding keyword.
        let matches = classify("Ruby on Rails");
        assert_eq!(matches[0].category, "backend");
        assert_eq!(matches[0].kind, MatchKind::Exact);
        assert!(matches.iter().any(|m| m.category == "coding"));
    }

    #[test]
    fn test_longer_keyword_outranks_shorter() {
        let matches = classify("Kafka and Postgres");
        assert_eq!(matches[0].category, "databases");
        assert_eq!(matches[0].matched_keyword, "postgres");
        assert_eq!(matches[1].category, "system_design");
    }

    #[test]
    fn test_more_hits_break_length_ties() {
        // kubernetes and postgresql are both 10 chars; containers also hits docker.
        let matches = classify("Experience with Docker, Kubernetes and PostgreSQL");
        assert_eq!(matches[0].category, "containers");
        assert_eq!(matches[0].hits, 2);
        assert_eq!(matches[1].category, "databases");
    }

    #[test]
    fn test_declaration_order_breaks_full_ties() {
        // kafka and redis: both contains, 5 chars, one hit each.
        for text in ["Kafka and Redis", "Redis and Kafka"] {
            let matches = classify(text);
            assert_eq!(categories(text), vec!["system_design", "databases"]);
            assert_eq!(matches[0].hits, matches[1].hits);
        }
    }

    #[test]
    fn test_part_of_prefers_shortest_enclosing_keyword() {
        let matches = classify("development");
        assert!(matches.iter().all(|m| m.kind == MatchKind::PartOf));
        assert_eq!(matches[0].category, "game_engines");
        assert_eq!(matches[0].matched_keyword, "game development");
        assert_eq!(matches[1].category, "mobile");

        // coding is declared first but its "software development" is longer.
        let keys = categories("development");
        let coding = keys.iter().position(|c| *c == "coding").unwrap();
        let mentoring = keys.iter().position(|c| *c == "mentoring").unwrap();
        assert!(mentoring < coding);
    }

    #[test]
    fn test_short_alias_matches_inside_longer_keyword() {
        let matches = classify("native");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, "mobile");
        assert_eq!(matches[0].kind, MatchKind::PartOf);
        assert_eq!(matches[0].matched_keyword, "react native");
    }

    #[test]
    fn test_single_character_never_matches_inside_keywords() {
        assert!(classify("x").is_empty());
    }

    #[test]
    fn test_best_returns_top_category() {
        let classifier = KeywordClassifier;
        assert_eq!(classifier.best("Figma"), Some("ux_design"));
        assert_eq!(classifier.best("qwertyuiop"), None);
        assert_eq!(classifier.backend(), "keyword");
    }

    #[test]
    fn test_contains_word_boundaries() {
        assert!(contains_word("i like go", "go"));
        assert!(!contains_word("ego", "go"));
        assert!(!contains_word("going", "go"));
        assert!(!contains_word("go-to-market", "go"));
        assert!(!contains_word("a pre-go step", "go"));
        assert!(contains_word("go - fast", "go"));
        assert!(!contains_word("go", "golang"));
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn test_contains_word_finds_overlapping_occurrence() {
        // First occurrence fails the left boundary, the overlapping one passes.
        assert!(contains_word("xa a a", "a a"));
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Spring\t\tBoot \n"), "spring boot");
    }
}
