//! Axum route handlers for the Taxonomy API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::skill::SkillExtraction;
use crate::state::AppState;
use crate::taxonomy::catalog::{self, CategoryDisplay, CategoryMetadata, Domain};
use crate::taxonomy::classifier::CategoryMatch;
use crate::taxonomy::grouping::{group_skills, SkillGrouping};
use crate::taxonomy::roles;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub matches: Vec<CategoryMatch>,
    pub best: Option<&'static str>,
    pub classifier_backend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RoleCategoriesResponse {
    pub role: String,
    pub used_default: bool,
    pub categories: Vec<CategoryDisplay>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<&'static CategoryMetadata>,
}

#[derive(Debug, Serialize)]
pub struct DomainSummary {
    pub key: &'static str,
    pub label: &'static str,
    pub category_count: usize,
}

#[derive(Debug, Serialize)]
pub struct DomainListResponse {
    pub domains: Vec<DomainSummary>,
}

#[derive(Debug, Serialize)]
pub struct DomainDetailResponse {
    pub key: &'static str,
    pub label: &'static str,
    pub categories: Vec<&'static CategoryMetadata>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/classify
///
/// Classifies free text (a skill name, a JD clause) into ranked categories.
/// Unclassifiable text yields an empty `matches` list, not an error.
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let limit = state.config.max_input_chars;
    if request.text.chars().count() > limit {
        return Err(AppError::Validation(format!(
            "text exceeds the {limit} character limit"
        )));
    }

    let mut matches = state.classifier.classify(&request.text);
    let best = matches.first().map(|m| m.category);
    if let Some(max) = state.config.max_results {
        matches.truncate(max);
    }

    Ok(Json(ClassifyResponse {
        matches,
        best,
        classifier_backend: state.classifier.backend(),
    }))
}

/// POST /api/v1/classify/skills
///
/// Groups a skill extraction (`{skills: [{name, proficiency, type}]}`) by category.
pub async fn handle_group_skills(
    State(state): State<AppState>,
    Json(request): Json<SkillExtraction>,
) -> Result<Json<SkillGrouping>, AppError> {
    let limit = state.config.max_skills;
    if request.skills.len() > limit {
        return Err(AppError::Validation(format!(
            "at most {limit} skills can be grouped per request"
        )));
    }

    Ok(Json(group_skills(
        state.classifier.as_ref(),
        &request.skills,
    )))
}

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<RoleListResponse> {
    Json(RoleListResponse {
        roles: roles::role_keys().collect(),
    })
}

/// GET /api/v1/roles/:role/categories
///
/// Suggested category toggles for a role. Unmapped roles get the default list.
pub async fn handle_role_categories(Path(role): Path<String>) -> Json<RoleCategoriesResponse> {
    let used_default = !roles::is_known_role(&role);
    let categories = roles::categories_for_role(&role)
        .iter()
        .map(|key| catalog::lookup_or_fallback(key))
        .collect();

    Json(RoleCategoriesResponse {
        role,
        used_default,
        categories,
    })
}

/// GET /api/v1/categories
pub async fn handle_list_categories(
    Query(params): Query<CategoryQuery>,
) -> Json<CategoryListResponse> {
    let categories = match params.role.as_deref() {
        Some(role) => catalog::for_role(role).collect(),
        None => catalog::all().iter().collect(),
    };
    Json(CategoryListResponse { categories })
}

/// GET /api/v1/categories/:key
///
/// Unknown keys return the neutral fallback with `known: false` so callers can still render.
pub async fn handle_get_category(Path(key): Path<String>) -> Json<CategoryDisplay> {
    Json(catalog::lookup_or_fallback(&key))
}

/// GET /api/v1/domains
pub async fn handle_list_domains() -> Json<DomainListResponse> {
    let domains = Domain::ALL
        .into_iter()
        .map(|domain| DomainSummary {
            key: domain.key(),
            label: domain.label(),
            category_count: catalog::by_domain(domain).count(),
        })
        .collect();
    Json(DomainListResponse { domains })
}

/// GET /api/v1/domains/:domain
pub async fn handle_get_domain(
    Path(key): Path<String>,
) -> Result<Json<DomainDetailResponse>, AppError> {
    let domain = Domain::from_key(&key)
        .ok_or_else(|| AppError::NotFound(format!("Domain '{key}' not found")))?;

    Ok(Json(DomainDetailResponse {
        key: domain.key(),
        label: domain.label(),
        categories: catalog::by_domain(domain).collect(),
    }))
}
