//! Role → category mapping used to pre-select interview categories for a role.
//!
//! Lookup is exact on the role id. Anything unmapped gets the `default` list.

/// Reserved role id whose list applies to every unmapped role.
pub const DEFAULT_ROLE: &str = "default";

/// Ordered by display priority within each role.
static ROLE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "software_engineer",
        &[
            "coding",
            "debugging",
            "testing",
            "version_control",
            "data_structures",
            "problem_solving",
            "collaboration",
        ],
    ),
    (
        "frontend_engineer",
        &[
            "frontend",
            "coding",
            "testing",
            "performance",
            "ux_design",
            "debugging",
            "collaboration",
        ],
    ),
    (
        "backend_engineer",
        &[
            "backend",
            "coding",
            "api_design",
            "databases",
            "system_design",
            "testing",
            "debugging",
            "problem_solving",
        ],
    ),
    (
        "fullstack_engineer",
        &[
            "coding",
            "frontend",
            "backend",
            "api_design",
            "databases",
            "testing",
            "collaboration",
        ],
    ),
    (
        "mobile_engineer",
        &[
            "mobile",
            "coding",
            "performance",
            "testing",
            "api_design",
            "debugging",
            "collaboration",
        ],
    ),
    (
        "devops_engineer",
        &[
            "devops",
            "containers",
            "cloud",
            "networking",
            "security",
            "debugging",
            "collaboration",
        ],
    ),
    (
        "security_engineer",
        &[
            "security",
            "networking",
            "coding",
            "cloud",
            "legal_compliance",
            "problem_solving",
            "communication",
        ],
    ),
    (
        "qa_engineer",
        &[
            "testing",
            "debugging",
            "coding",
            "devops",
            "critical_thinking",
            "communication",
            "collaboration",
        ],
    ),
    (
        "data_scientist",
        &[
            "machine_learning",
            "data_analysis",
            "coding",
            "algorithms",
            "product_metrics",
            "communication",
            "critical_thinking",
        ],
    ),
    (
        "data_engineer",
        &[
            "data_engineering",
            "databases",
            "coding",
            "cloud",
            "system_design",
            "performance",
            "collaboration",
        ],
    ),
    (
        "ml_engineer",
        &[
            "machine_learning",
            "coding",
            "data_engineering",
            "algorithms",
            "system_design",
            "cloud",
            "problem_solving",
        ],
    ),
    (
        "engineering_manager",
        &[
            "leadership",
            "mentoring",
            "project_management",
            "system_design",
            "stakeholder_management",
            "communication",
            "conflict_resolution",
        ],
    ),
    (
        "product_manager",
        &[
            "product_strategy",
            "prioritization",
            "roadmapping",
            "user_research",
            "product_metrics",
            "stakeholder_management",
            "communication",
        ],
    ),
    (
        "product_designer",
        &[
            "ux_design",
            "user_research",
            "frontend",
            "product_strategy",
            "collaboration",
            "communication",
            "adaptability",
        ],
    ),
    (
        "business_analyst",
        &[
            "data_analysis",
            "business_acumen",
            "financial_analysis",
            "stakeholder_management",
            "critical_thinking",
            "communication",
        ],
    ),
    (
        "operations_manager",
        &[
            "operations",
            "project_management",
            "business_acumen",
            "leadership",
            "time_management",
            "problem_solving",
        ],
    ),
    (
        "project_manager",
        &[
            "project_management",
            "stakeholder_management",
            "time_management",
            "communication",
            "leadership",
            "conflict_resolution",
        ],
    ),
    (
        "financial_analyst",
        &[
            "financial_analysis",
            "fintech",
            "data_analysis",
            "business_acumen",
            "critical_thinking",
            "communication",
        ],
    ),
    (
        "sales_representative",
        &[
            "sales",
            "negotiation",
            "lead_generation",
            "communication",
            "adaptability",
            "work_ethic",
        ],
    ),
    (
        "account_executive",
        &[
            "sales",
            "negotiation",
            "stakeholder_management",
            "customer_success",
            "communication",
            "business_acumen",
        ],
    ),
    (
        "marketing_manager",
        &[
            "digital_marketing",
            "brand_marketing",
            "lead_generation",
            "product_metrics",
            "communication",
            "leadership",
        ],
    ),
    (
        "customer_success_manager",
        &[
            "customer_success",
            "communication",
            "conflict_resolution",
            "stakeholder_management",
            "problem_solving",
            "adaptability",
        ],
    ),
    (
        "healthcare_specialist",
        &[
            "healthcare",
            "legal_compliance",
            "communication",
            "critical_thinking",
            "work_ethic",
            "collaboration",
        ],
    ),
    (
        "game_developer",
        &[
            "game_engines",
            "coding",
            "graphics_programming",
            "multiplayer_networking",
            "performance",
            "debugging",
            "collaboration",
        ],
    ),
    (
        "game_designer",
        &[
            "game_design",
            "level_design",
            "game_monetization",
            "user_research",
            "communication",
            "collaboration",
        ],
    ),
    (
        DEFAULT_ROLE,
        &[
            "communication",
            "problem_solving",
            "collaboration",
            "adaptability",
            "work_ethic",
        ],
    ),
];

/// Looks up a role's own list without falling back.
pub fn mapped_categories(role: &str) -> Option<&'static [&'static str]> {
    ROLE_CATEGORIES
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, cats)| *cats)
}

/// Categories relevant to `role`, or the `default` list when the role is unmapped.
pub fn categories_for_role(role: &str) -> &'static [&'static str] {
    mapped_categories(role).unwrap_or_else(default_categories)
}

pub fn default_categories() -> &'static [&'static str] {
    mapped_categories(DEFAULT_ROLE).unwrap_or(&[])
}

/// True when `role` has its own entry. `default` itself is not a role.
pub fn is_known_role(role: &str) -> bool {
    role != DEFAULT_ROLE && mapped_categories(role).is_some()
}

/// Mapped role ids in declaration order, excluding `default`.
pub fn role_keys() -> impl Iterator<Item = &'static str> {
    ROLE_CATEGORIES
        .iter()
        .map(|(r, _)| *r)
        .filter(|r| *r != DEFAULT_ROLE)
}

/// The raw table, `default` included.
pub(crate) fn entries() -> &'static [(&'static str, &'static [&'static str])] {
    ROLE_CATEGORIES
}
