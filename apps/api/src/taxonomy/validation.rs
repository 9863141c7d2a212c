//! Consistency checks across the keyword dictionary, catalog and role mapping.
//!
//! Problems here are authoring bugs in the static tables. Startup logs them; it does
//! not refuse to serve.

use std::collections::HashSet;

use thiserror::Error;

use crate::taxonomy::catalog::{self, CategoryMetadata, RoleScope};
use crate::taxonomy::classifier::normalize;
use crate::taxonomy::keywords::KEYWORD_DICTIONARY;
use crate::taxonomy::roles::{self, DEFAULT_ROLE};

type KeywordTable = [(&'static str, &'static [&'static str])];
type RoleTable = [(&'static str, &'static [&'static str])];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyIssue {
    #[error("keyword category '{0}' has no catalog entry")]
    UncataloguedCategory(&'static str),

    #[error("catalog category '{0}' has no keywords")]
    CategoryWithoutKeywords(&'static str),

    #[error("role '{role}' references unknown category '{category}'")]
    UnknownRoleCategory {
        role: &'static str,
        category: &'static str,
    },

    #[error("role '{role}' suggests category '{category}' which does not apply to it")]
    InapplicableRoleCategory {
        role: &'static str,
        category: &'static str,
    },

    #[error("category '{category}' lists unmapped role '{role}'")]
    UnknownApplicableRole {
        category: &'static str,
        role: &'static str,
    },

    #[error("role mapping has no 'default' entry")]
    MissingDefaultRole,

    #[error("category '{category}' declares keyword '{keyword}' more than once")]
    DuplicateKeyword {
        category: &'static str,
        keyword: &'static str,
    },

    #[error("category '{0}' declares a blank keyword")]
    BlankKeyword(&'static str),
}

/// Validates the shipped tables.
pub fn validate() -> Vec<TaxonomyIssue> {
    validate_tables(KEYWORD_DICTIONARY, catalog::all(), roles::entries())
}

pub fn validate_tables(
    dictionary: &KeywordTable,
    catalog: &[CategoryMetadata],
    roles: &RoleTable,
) -> Vec<TaxonomyIssue> {
    let mut issues = Vec::new();

    let catalog_keys: HashSet<&str> = catalog.iter().map(|c| c.key).collect();
    let role_keys: HashSet<&str> = roles
        .iter()
        .map(|(r, _)| *r)
        .filter(|r| *r != DEFAULT_ROLE)
        .collect();

    for (category, keywords) in dictionary {
        if !catalog_keys.contains(category) {
            issues.push(TaxonomyIssue::UncataloguedCategory(*category));
        }

        let mut seen = HashSet::new();
        for keyword in keywords.iter() {
            let normalized = normalize(keyword);
            if normalized.is_empty() {
                issues.push(TaxonomyIssue::BlankKeyword(*category));
            } else if !seen.insert(normalized) {
                issues.push(TaxonomyIssue::DuplicateKeyword {
                    category: *category,
                    keyword: *keyword,
                });
            }
        }
    }

    for meta in catalog {
        let has_keywords = dictionary
            .iter()
            .any(|(c, kws)| *c == meta.key && !kws.is_empty());
        if !has_keywords {
            issues.push(TaxonomyIssue::CategoryWithoutKeywords(meta.key));
        }

        if let RoleScope::Roles(applicable) = meta.applicable_roles {
            for role in applicable {
                if !role_keys.contains(role) {
                    issues.push(TaxonomyIssue::UnknownApplicableRole {
                        category: meta.key,
                        role: *role,
                    });
                }
            }
        }
    }

    if !roles.iter().any(|(r, _)| *r == DEFAULT_ROLE) {
        issues.push(TaxonomyIssue::MissingDefaultRole);
    }

    for (role, categories) in roles {
        for category in categories.iter() {
            match catalog.iter().find(|c| c.key == *category) {
                None => issues.push(TaxonomyIssue::UnknownRoleCategory {
                    role: *role,
                    category: *category,
                }),
                Some(meta) if *role != DEFAULT_ROLE && !meta.applicable_roles.includes(role) => {
                    issues.push(TaxonomyIssue::InapplicableRoleCategory {
                        role: *role,
                        category: *category,
                    })
                }
                Some(_) => {}
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::catalog::Domain;

    fn meta(key: &'static str, applicable_roles: RoleScope) -> CategoryMetadata {
        CategoryMetadata {
            key,
            domain: Domain::Technical,
            icon: "🔧",
            label: "Test",
            description: "Test category",
            applicable_roles,
        }
    }

    #[test]
    fn test_shipped_tables_validate_clean() {
        let issues = validate();
        assert!(issues.is_empty(), "taxonomy issues: {issues:?}");
    }

    #[test]
    fn test_consistent_tables_have_no_issues() {
        let dictionary: &KeywordTable = &[("alpha", &["a1", "a2"])];
        let catalog = [meta("alpha", RoleScope::Roles(&["tester"]))];
        let roles: &RoleTable = &[("tester", &["alpha"]), (DEFAULT_ROLE, &["alpha"])];
        assert!(validate_tables(dictionary, &catalog, roles).is_empty());
    }

    #[test]
    fn test_detects_cross_table_mismatches() {
        let dictionary: &KeywordTable = &[("alpha", &["a1"]), ("ghost", &["g1"])];
        let catalog = [
            meta("alpha", RoleScope::Roles(&["nobody"])),
            meta("beta", RoleScope::All),
        ];
        let roles: &RoleTable = &[("tester", &["alpha", "gamma"])];

        let issues = validate_tables(dictionary, &catalog, roles);
        assert!(issues.contains(&TaxonomyIssue::UncataloguedCategory("ghost")));
        assert!(issues.contains(&TaxonomyIssue::CategoryWithoutKeywords("beta")));
        assert!(issues.contains(&TaxonomyIssue::UnknownApplicableRole {
            category: "alpha",
            role: "nobody",
        }));
        assert!(issues.contains(&TaxonomyIssue::UnknownRoleCategory {
            role: "tester",
            category: "gamma",
        }));
        assert!(issues.contains(&TaxonomyIssue::MissingDefaultRole));
    }

    #[test]
    fn test_detects_role_suggesting_inapplicable_category() {
        let dictionary: &KeywordTable = &[("alpha", &["a1"]), ("beta", &["b1"])];
        let catalog = [
            meta("alpha", RoleScope::Roles(&["tester"])),
            meta("beta", RoleScope::Roles(&["tester"])),
        ];
        let roles: &RoleTable = &[
            ("tester", &["alpha"]),
            ("analyst", &["alpha", "beta"]),
            (DEFAULT_ROLE, &["beta"]),
        ];

        let issues = validate_tables(dictionary, &catalog, roles);
        assert_eq!(
            issues,
            vec![
                TaxonomyIssue::InapplicableRoleCategory {
                    role: "analyst",
                    category: "alpha",
                },
                TaxonomyIssue::InapplicableRoleCategory {
                    role: "analyst",
                    category: "beta",
                },
            ]
        );
    }

    #[test]
    fn test_detects_duplicate_and_blank_keywords() {
        let dictionary: &KeywordTable = &[("alpha", &["Spark", "spark", "  "])];
        let catalog = [meta("alpha", RoleScope::All)];
        let roles: &RoleTable = &[(DEFAULT_ROLE, &["alpha"])];

        let issues = validate_tables(dictionary, &catalog, roles);
        assert_eq!(
            issues,
            vec![
                TaxonomyIssue::DuplicateKeyword {
                    category: "alpha",
                    keyword: "spark",
                },
                TaxonomyIssue::BlankKeyword("alpha"),
            ]
        );
    }

    #[test]
    fn test_issue_messages_name_the_problem() {
        let issue = TaxonomyIssue::UnknownRoleCategory {
            role: "qa_engineer",
            category: "juggling",
        };
        assert_eq!(
            issue.to_string(),
            "role 'qa_engineer' references unknown category 'juggling'"
        );
        assert_eq!(
            TaxonomyIssue::MissingDefaultRole.to_string(),
            "role mapping has no 'default' entry"
        );
    }
}
