//! Category Catalog — display metadata for every interview category, grouped by domain.
//!
//! Entries are declared in display order. Lookups are exact-key; a missing key is an
//! authoring bug and resolves to a neutral fallback rather than an error.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

// ────────────────────────────────────────────────────────────────────────────
// Domain
// ────────────────────────────────────────────────────────────────────────────

/// Fixed set of domains the catalog is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Technical,
    Product,
    Business,
    SalesMarketing,
    SoftSkills,
    Domain,
    Gaming,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::Technical,
        Domain::Product,
        Domain::Business,
        Domain::SalesMarketing,
        Domain::SoftSkills,
        Domain::Domain,
        Domain::Gaming,
    ];

    /// The snake_case key used on the wire and in URLs.
    pub fn key(self) -> &'static str {
        match self {
            Domain::Technical => "technical",
            Domain::Product => "product",
            Domain::Business => "business",
            Domain::SalesMarketing => "sales_marketing",
            Domain::SoftSkills => "soft_skills",
            Domain::Domain => "domain",
            Domain::Gaming => "gaming",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Domain::Technical => "Technical",
            Domain::Product => "Product",
            Domain::Business => "Business",
            Domain::SalesMarketing => "Sales & Marketing",
            Domain::SoftSkills => "Soft Skills",
            Domain::Domain => "Domain Expertise",
            Domain::Gaming => "Gaming",
        }
    }

    /// Parses a domain key. Exact match on the snake_case key.
    pub fn from_key(key: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|d| d.key() == key)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Metadata
// ────────────────────────────────────────────────────────────────────────────

/// Which roles a category is offered to. Serialized as `"all"` or a list of role ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleScope {
    All,
    Roles(&'static [&'static str]),
}

impl RoleScope {
    pub fn includes(&self, role: &str) -> bool {
        match self {
            RoleScope::All => true,
            RoleScope::Roles(roles) => roles.contains(&role),
        }
    }
}

impl Serialize for RoleScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RoleScope::All => serializer.serialize_str("all"),
            RoleScope::Roles(roles) => {
                let mut seq = serializer.serialize_seq(Some(roles.len()))?;
                for role in roles.iter() {
                    seq.serialize_element(role)?;
                }
                seq.end()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryMetadata {
    pub key: &'static str,
    pub domain: Domain,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub applicable_roles: RoleScope,
}

/// Renderable view of a category. `known = false` marks the neutral fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDisplay {
    pub key: String,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub domain: Option<Domain>,
    pub known: bool,
}

pub const FALLBACK_ICON: &str = "❔";
pub const FALLBACK_LABEL: &str = "Unknown Category";
pub const FALLBACK_DESCRIPTION: &str = "This category is not in the catalog.";

impl From<&CategoryMetadata> for CategoryDisplay {
    fn from(meta: &CategoryMetadata) -> Self {
        CategoryDisplay {
            key: meta.key.to_string(),
            icon: meta.icon,
            label: meta.label,
            description: meta.description,
            domain: Some(meta.domain),
            known: true,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lookups
// ────────────────────────────────────────────────────────────────────────────

/// All catalog entries in declaration order.
pub fn all() -> &'static [CategoryMetadata] {
    CATALOG
}

pub fn lookup(key: &str) -> Option<&'static CategoryMetadata> {
    CATALOG.iter().find(|c| c.key == key)
}

/// Resolves a key to display metadata, or to the neutral fallback for unknown keys.
pub fn lookup_or_fallback(key: &str) -> CategoryDisplay {
    match lookup(key) {
        Some(meta) => meta.into(),
        None => {
            tracing::warn!("Category '{key}' is not in the catalog, rendering fallback");
            CategoryDisplay {
                key: key.to_string(),
                icon: FALLBACK_ICON,
                label: FALLBACK_LABEL,
                description: FALLBACK_DESCRIPTION,
                domain: None,
                known: false,
            }
        }
    }
}

pub fn by_domain(domain: Domain) -> impl Iterator<Item = &'static CategoryMetadata> {
    CATALOG.iter().filter(move |c| c.domain == domain)
}

/// Catalog entries offered to `role`, either explicitly or via `"all"`.
pub fn for_role<'a>(role: &'a str) -> impl Iterator<Item = &'static CategoryMetadata> + 'a {
    CATALOG
        .iter()
        .filter(move |c| c.applicable_roles.includes(role))
}

// ────────────────────────────────────────────────────────────────────────────
// Data
// ────────────────────────────────────────────────────────────────────────────

const ENGINEERS: &[&str] = &[
    "software_engineer",
    "frontend_engineer",
    "backend_engineer",
    "fullstack_engineer",
    "mobile_engineer",
    "devops_engineer",
    "security_engineer",
    "qa_engineer",
    "data_engineer",
    "ml_engineer",
    "game_developer",
];

const CODERS: &[&str] = &[
    "software_engineer",
    "frontend_engineer",
    "backend_engineer",
    "fullstack_engineer",
    "mobile_engineer",
    "devops_engineer",
    "security_engineer",
    "qa_engineer",
    "data_engineer",
    "ml_engineer",
    "game_developer",
    "data_scientist",
];

const BACKEND_ROLES: &[&str] = &[
    "software_engineer",
    "backend_engineer",
    "fullstack_engineer",
    "data_engineer",
    "ml_engineer",
    "engineering_manager",
];

const INFRA_ROLES: &[&str] = &[
    "software_engineer",
    "backend_engineer",
    "fullstack_engineer",
    "devops_engineer",
    "security_engineer",
    "data_engineer",
    "ml_engineer",
];

const DELIVERY_ROLES: &[&str] = &[
    "software_engineer",
    "backend_engineer",
    "fullstack_engineer",
    "devops_engineer",
    "security_engineer",
    "data_engineer",
    "ml_engineer",
    "qa_engineer",
];

const API_ROLES: &[&str] = &[
    "software_engineer",
    "backend_engineer",
    "fullstack_engineer",
    "mobile_engineer",
    "data_engineer",
    "ml_engineer",
    "engineering_manager",
];

const DATA_ROLES: &[&str] = &[
    "data_scientist",
    "data_engineer",
    "ml_engineer",
    "business_analyst",
    "financial_analyst",
];

const PRODUCT_ROLES: &[&str] = &[
    "product_manager",
    "product_designer",
    "engineering_manager",
    "game_designer",
];

const BUSINESS_ROLES: &[&str] = &[
    "business_analyst",
    "operations_manager",
    "project_manager",
    "financial_analyst",
    "product_manager",
    "engineering_manager",
    "account_executive",
    "marketing_manager",
];

const STAKEHOLDER_ROLES: &[&str] = &[
    "business_analyst",
    "operations_manager",
    "project_manager",
    "financial_analyst",
    "product_manager",
    "engineering_manager",
    "account_executive",
    "marketing_manager",
    "customer_success_manager",
];

const GO_TO_MARKET_ROLES: &[&str] = &[
    "sales_representative",
    "account_executive",
    "marketing_manager",
    "customer_success_manager",
    "product_manager",
];

const GAME_ROLES: &[&str] = &["game_developer", "game_designer"];

static CATALOG: &[CategoryMetadata] = &[
    // Technical
    CategoryMetadata {
        key: "coding",
        domain: Domain::Technical,
        icon: "💻",
        label: "Coding",
        description: "Writing correct, readable code in the candidate's primary languages",
        applicable_roles: RoleScope::Roles(CODERS),
    },
    CategoryMetadata {
        key: "debugging",
        domain: Domain::Technical,
        icon: "🐛",
        label: "Debugging",
        description: "Locating and fixing defects from symptoms, logs and traces",
        applicable_roles: RoleScope::Roles(ENGINEERS),
    },
    CategoryMetadata {
        key: "testing",
        domain: Domain::Technical,
        icon: "🧪",
        label: "Testing",
        description: "Unit, integration and end-to-end testing strategy",
        applicable_roles: RoleScope::Roles(ENGINEERS),
    },
    CategoryMetadata {
        key: "version_control",
        domain: Domain::Technical,
        icon: "🌿",
        label: "Version Control",
        description: "Branching, merging, code review and history hygiene",
        applicable_roles: RoleScope::Roles(ENGINEERS),
    },
    CategoryMetadata {
        key: "data_structures",
        domain: Domain::Technical,
        icon: "🧱",
        label: "Data Structures",
        description: "Choosing and implementing the right containers for a problem",
        applicable_roles: RoleScope::Roles(ENGINEERS),
    },
    CategoryMetadata {
        key: "algorithms",
        domain: Domain::Technical,
        icon: "🧮",
        label: "Algorithms",
        description: "Algorithmic techniques and complexity analysis",
        applicable_roles: RoleScope::Roles(CODERS),
    },
    CategoryMetadata {
        key: "system_design",
        domain: Domain::Technical,
        icon: "🏗️",
        label: "System Design",
        description: "Designing scalable, reliable distributed systems",
        applicable_roles: RoleScope::Roles(BACKEND_ROLES),
    },
    CategoryMetadata {
        key: "databases",
        domain: Domain::Technical,
        icon: "🗄️",
        label: "Databases",
        description: "Data modelling, querying and storage engines",
        applicable_roles: RoleScope::Roles(BACKEND_ROLES),
    },
    CategoryMetadata {
        key: "containers",
        domain: Domain::Technical,
        icon: "📦",
        label: "Containers & Orchestration",
        description: "Container images, runtimes and orchestration platforms",
        applicable_roles: RoleScope::Roles(INFRA_ROLES),
    },
    CategoryMetadata {
        key: "cloud",
        domain: Domain::Technical,
        icon: "☁️",
        label: "Cloud Platforms",
        description: "Building on public cloud providers and managed services",
        applicable_roles: RoleScope::Roles(INFRA_ROLES),
    },
    CategoryMetadata {
        key: "devops",
        domain: Domain::Technical,
        icon: "🔁",
        label: "DevOps & CI/CD",
        description: "Build pipelines, infrastructure as code and release automation",
        applicable_roles: RoleScope::Roles(DELIVERY_ROLES),
    },
    CategoryMetadata {
        key: "security",
        domain: Domain::Technical,
        icon: "🔒",
        label: "Security",
        description: "Application and infrastructure security practices",
        applicable_roles: RoleScope::Roles(INFRA_ROLES),
    },
    CategoryMetadata {
        key: "networking",
        domain: Domain::Technical,
        icon: "🌐",
        label: "Networking",
        description: "Network protocols, routing and troubleshooting",
        applicable_roles: RoleScope::Roles(INFRA_ROLES),
    },
    CategoryMetadata {
        key: "frontend",
        domain: Domain::Technical,
        icon: "🎨",
        label: "Frontend Development",
        description: "Browser UI engineering, component frameworks and styling",
        applicable_roles: RoleScope::Roles(&[
            "software_engineer",
            "frontend_engineer",
            "fullstack_engineer",
            "product_designer",
        ]),
    },
    CategoryMetadata {
        key: "backend",
        domain: Domain::Technical,
        icon: "⚙️",
        label: "Backend Development",
        description: "Server-side frameworks, services and business logic",
        applicable_roles: RoleScope::Roles(BACKEND_ROLES),
    },
    CategoryMetadata {
        key: "mobile",
        domain: Domain::Technical,
        icon: "📱",
        label: "Mobile Development",
        description: "Native and cross-platform mobile applications",
        applicable_roles: RoleScope::Roles(&["software_engineer", "mobile_engineer"]),
    },
    CategoryMetadata {
        key: "api_design",
        domain: Domain::Technical,
        icon: "🔌",
        label: "API Design",
        description: "Designing and versioning service interfaces",
        applicable_roles: RoleScope::Roles(API_ROLES),
    },
    CategoryMetadata {
        key: "performance",
        domain: Domain::Technical,
        icon: "⚡",
        label: "Performance",
        description: "Profiling, caching and latency optimisation",
        applicable_roles: RoleScope::Roles(ENGINEERS),
    },
    CategoryMetadata {
        key: "machine_learning",
        domain: Domain::Technical,
        icon: "🤖",
        label: "Machine Learning",
        description: "Model training, evaluation and deployment",
        applicable_roles: RoleScope::Roles(DATA_ROLES),
    },
    CategoryMetadata {
        key: "data_engineering",
        domain: Domain::Technical,
        icon: "🚰",
        label: "Data Engineering",
        description: "Pipelines, warehouses and streaming data platforms",
        applicable_roles: RoleScope::Roles(DATA_ROLES),
    },
    CategoryMetadata {
        key: "data_analysis",
        domain: Domain::Technical,
        icon: "📊",
        label: "Data Analysis",
        description: "Turning data into insight with statistics and visualisation",
        applicable_roles: RoleScope::Roles(DATA_ROLES),
    },
    // Product
    CategoryMetadata {
        key: "product_strategy",
        domain: Domain::Product,
        icon: "🧭",
        label: "Product Strategy",
        description: "Vision, positioning and product-market fit",
        applicable_roles: RoleScope::Roles(PRODUCT_ROLES),
    },
    CategoryMetadata {
        key: "user_research",
        domain: Domain::Product,
        icon: "🔍",
        label: "User Research",
        description: "Discovering user needs through interviews and testing",
        applicable_roles: RoleScope::Roles(PRODUCT_ROLES),
    },
    CategoryMetadata {
        key: "roadmapping",
        domain: Domain::Product,
        icon: "🗺️",
        label: "Roadmapping",
        description: "Planning and communicating what gets built when",
        applicable_roles: RoleScope::Roles(PRODUCT_ROLES),
    },
    CategoryMetadata {
        key: "prioritization",
        domain: Domain::Product,
        icon: "📋",
        label: "Prioritization",
        description: "Trading off scope, impact and effort",
        applicable_roles: RoleScope::Roles(PRODUCT_ROLES),
    },
    CategoryMetadata {
        key: "product_metrics",
        domain: Domain::Product,
        icon: "📈",
        label: "Product Metrics",
        description: "Defining and moving the metrics that matter",
        applicable_roles: RoleScope::Roles(&[
            "product_manager",
            "data_scientist",
            "marketing_manager",
            "game_designer",
        ]),
    },
    CategoryMetadata {
        key: "ux_design",
        domain: Domain::Product,
        icon: "✏️",
        label: "UX Design",
        description: "Interaction design, prototyping and usability",
        applicable_roles: RoleScope::Roles(&[
            "product_designer",
            "frontend_engineer",
            "product_manager",
        ]),
    },
    // Business
    CategoryMetadata {
        key: "business_acumen",
        domain: Domain::Business,
        icon: "💼",
        label: "Business Acumen",
        description: "Understanding how the business makes and spends money",
        applicable_roles: RoleScope::Roles(BUSINESS_ROLES),
    },
    CategoryMetadata {
        key: "financial_analysis",
        domain: Domain::Business,
        icon: "💰",
        label: "Financial Analysis",
        description: "Modelling, forecasting and budgeting",
        applicable_roles: RoleScope::Roles(BUSINESS_ROLES),
    },
    CategoryMetadata {
        key: "operations",
        domain: Domain::Business,
        icon: "🏭",
        label: "Operations",
        description: "Running processes, supply chains and vendors efficiently",
        applicable_roles: RoleScope::Roles(BUSINESS_ROLES),
    },
    CategoryMetadata {
        key: "project_management",
        domain: Domain::Business,
        icon: "📅",
        label: "Project Management",
        description: "Planning, tracking and delivering projects on time",
        applicable_roles: RoleScope::Roles(BUSINESS_ROLES),
    },
    CategoryMetadata {
        key: "stakeholder_management",
        domain: Domain::Business,
        icon: "🤝",
        label: "Stakeholder Management",
        description: "Aligning people with competing interests",
        applicable_roles: RoleScope::Roles(STAKEHOLDER_ROLES),
    },
    CategoryMetadata {
        key: "strategic_planning",
        domain: Domain::Business,
        icon: "♟️",
        label: "Strategic Planning",
        description: "Long-range goals, competitive analysis and OKRs",
        applicable_roles: RoleScope::Roles(BUSINESS_ROLES),
    },
    // Sales & Marketing
    CategoryMetadata {
        key: "sales",
        domain: Domain::SalesMarketing,
        icon: "💵",
        label: "Sales",
        description: "Prospecting, pipeline management and closing",
        applicable_roles: RoleScope::Roles(GO_TO_MARKET_ROLES),
    },
    CategoryMetadata {
        key: "negotiation",
        domain: Domain::SalesMarketing,
        icon: "⚖️",
        label: "Negotiation",
        description: "Reaching agreements on price, terms and scope",
        applicable_roles: RoleScope::Roles(GO_TO_MARKET_ROLES),
    },
    CategoryMetadata {
        key: "digital_marketing",
        domain: Domain::SalesMarketing,
        icon: "📣",
        label: "Digital Marketing",
        description: "SEO, paid acquisition, email and social channels",
        applicable_roles: RoleScope::Roles(GO_TO_MARKET_ROLES),
    },
    CategoryMetadata {
        key: "brand_marketing",
        domain: Domain::SalesMarketing,
        icon: "🏷️",
        label: "Brand Marketing",
        description: "Brand identity, messaging and campaigns",
        applicable_roles: RoleScope::Roles(GO_TO_MARKET_ROLES),
    },
    CategoryMetadata {
        key: "customer_success",
        domain: Domain::SalesMarketing,
        icon: "🌟",
        label: "Customer Success",
        description: "Onboarding, retention and account health",
        applicable_roles: RoleScope::Roles(GO_TO_MARKET_ROLES),
    },
    CategoryMetadata {
        key: "lead_generation",
        domain: Domain::SalesMarketing,
        icon: "🎯",
        label: "Lead Generation",
        description: "Filling the top of the funnel with qualified leads",
        applicable_roles: RoleScope::Roles(GO_TO_MARKET_ROLES),
    },
    // Soft skills
    CategoryMetadata {
        key: "communication",
        domain: Domain::SoftSkills,
        icon: "💬",
        label: "Communication",
        description: "Explaining ideas clearly in writing and speech",
        applicable_roles: RoleScope::All,
    },
    CategoryMetadata {
        key: "problem_solving",
        domain: Domain::SoftSkills,
        icon: "🧩",
        label: "Problem Solving",
        description: "Breaking down ambiguous problems into workable steps",
        applicable_roles: RoleScope::All,
    },
    CategoryMetadata {
        key: "collaboration",
        domain: Domain::SoftSkills,
        icon: "👥",
        label: "Collaboration",
        description: "Working effectively with teammates and other teams",
        applicable_roles: RoleScope::All,
    },
    CategoryMetadata {
        key: "adaptability",
        domain: Domain::SoftSkills,
        icon: "🔄",
        label: "Adaptability",
        description: "Handling change, ambiguity and new information",
        applicable_roles: RoleScope::All,
    },
    CategoryMetadata {
        key: "work_ethic",
        domain: Domain::SoftSkills,
        icon: "💪",
        label: "Work Ethic",
        description: "Reliability, ownership and follow-through",
        applicable_roles: RoleScope::All,
    },
    CategoryMetadata {
        key: "leadership",
        domain: Domain::SoftSkills,
        icon: "🎖️",
        label: "Leadership",
        description: "Setting direction and growing the people around you",
        applicable_roles: RoleScope::All,
    },
    CategoryMetadata {
        key: "time_management",
        domain: Domain::SoftSkills,
        icon: "⏱️",
        label: "Time Management",
        description: "Managing priorities and deadlines",
        applicable_roles: RoleScope::All,
    },
    CategoryMetadata {
        key: "critical_thinking",
        domain: Domain::SoftSkills,
        icon: "🧠",
        label: "Critical Thinking",
        description: "Evaluating evidence and reasoning about trade-offs",
        applicable_roles: RoleScope::All,
    },
    CategoryMetadata {
        key: "conflict_resolution",
        domain: Domain::SoftSkills,
        icon: "🕊️",
        label: "Conflict Resolution",
        description: "Resolving disagreements constructively",
        applicable_roles: RoleScope::All,
    },
    CategoryMetadata {
        key: "mentoring",
        domain: Domain::SoftSkills,
        icon: "🌱",
        label: "Mentoring",
        description: "Coaching and developing others",
        applicable_roles: RoleScope::All,
    },
    // Domain expertise
    CategoryMetadata {
        key: "healthcare",
        domain: Domain::Domain,
        icon: "🏥",
        label: "Healthcare",
        description: "Clinical workflows, health data and medical regulation",
        applicable_roles: RoleScope::Roles(&[
            "healthcare_specialist",
            "data_scientist",
            "business_analyst",
        ]),
    },
    CategoryMetadata {
        key: "fintech",
        domain: Domain::Domain,
        icon: "🏦",
        label: "Financial Services",
        description: "Payments, banking, trading and risk",
        applicable_roles: RoleScope::Roles(&[
            "financial_analyst",
            "backend_engineer",
            "business_analyst",
        ]),
    },
    CategoryMetadata {
        key: "legal_compliance",
        domain: Domain::Domain,
        icon: "📜",
        label: "Legal & Compliance",
        description: "Regulatory frameworks, privacy law and audits",
        applicable_roles: RoleScope::Roles(&[
            "security_engineer",
            "healthcare_specialist",
            "financial_analyst",
            "operations_manager",
        ]),
    },
    CategoryMetadata {
        key: "ecommerce",
        domain: Domain::Domain,
        icon: "🛒",
        label: "E-commerce",
        description: "Online storefronts, checkout and fulfilment",
        applicable_roles: RoleScope::Roles(&[
            "product_manager",
            "marketing_manager",
            "fullstack_engineer",
        ]),
    },
    CategoryMetadata {
        key: "education_tech",
        domain: Domain::Domain,
        icon: "🎓",
        label: "Education",
        description: "Learning platforms, curriculum and instructional design",
        applicable_roles: RoleScope::Roles(&["product_manager", "product_designer"]),
    },
    // Gaming
    CategoryMetadata {
        key: "game_design",
        domain: Domain::Gaming,
        icon: "🎮",
        label: "Game Design",
        description: "Mechanics, systems and player experience",
        applicable_roles: RoleScope::Roles(GAME_ROLES),
    },
    CategoryMetadata {
        key: "game_engines",
        domain: Domain::Gaming,
        icon: "🕹️",
        label: "Game Engines",
        description: "Building games on commercial and in-house engines",
        applicable_roles: RoleScope::Roles(GAME_ROLES),
    },
    CategoryMetadata {
        key: "graphics_programming",
        domain: Domain::Gaming,
        icon: "🖼️",
        label: "Graphics Programming",
        description: "Rendering pipelines, shaders and GPU programming",
        applicable_roles: RoleScope::Roles(GAME_ROLES),
    },
    CategoryMetadata {
        key: "level_design",
        domain: Domain::Gaming,
        icon: "🧗",
        label: "Level Design",
        description: "Building spaces, encounters and pacing",
        applicable_roles: RoleScope::Roles(GAME_ROLES),
    },
    CategoryMetadata {
        key: "game_monetization",
        domain: Domain::Gaming,
        icon: "🪙",
        label: "Game Monetization",
        description: "Live ops, in-game economies and retention",
        applicable_roles: RoleScope::Roles(GAME_ROLES),
    },
    CategoryMetadata {
        key: "multiplayer_networking",
        domain: Domain::Gaming,
        icon: "📡",
        label: "Multiplayer Networking",
        description: "Netcode, matchmaking and server authority",
        applicable_roles: RoleScope::Roles(GAME_ROLES),
    },
];
