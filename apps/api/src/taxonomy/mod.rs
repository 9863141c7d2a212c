//! Interview-category taxonomy: keyword dictionary, category catalog, role mapping,
//! and the classifier that ties free text to categories.

pub mod catalog;
pub mod classifier;
pub mod grouping;
pub mod handlers;
pub mod keywords;
pub mod roles;
pub mod validation;

use tracing::{error, info};

/// Runs the table consistency checks and logs the outcome. Returns the issue count.
pub fn log_validation() -> usize {
    let issues = validation::validate();
    if issues.is_empty() {
        info!(
            "Taxonomy loaded: {} categories, {} roles",
            catalog::all().len(),
            roles::role_keys().count()
        );
    } else {
        for issue in &issues {
            error!("Taxonomy issue: {issue}");
        }
    }
    issues.len()
}
