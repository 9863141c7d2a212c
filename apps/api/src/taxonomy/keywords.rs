//! Keyword Dictionary — category → phrase variants that indicate the category.
//!
//! Keywords are lower-case and single-spaced. A phrase may legitimately appear under
//! more than one category; the classifier ranks the overlap. Declaration order is the
//! final tie-break, so it follows the catalog order.

pub static KEYWORD_DICTIONARY: &[(&str, &[&str])] = &[
    // Technical
    (
        "coding",
        &[
            "coding",
            "programming",
            "software development",
            "python",
            "javascript",
            "typescript",
            "ts",
            "java",
            "c++",
            "cpp",
            "c#",
            "csharp",
            "go",
            "golang",
            "rust",
            "ruby",
            "php",
            "kotlin",
            "swift",
            "scala",
            "elixir",
            "haskell",
            "clojure",
            "perl",
            "lua",
            "dart",
            "objective-c",
            "shell scripting",
            "bash",
            "powershell",
            "clean code",
            "code quality",
            "pair programming",
            "live coding",
            "refactoring",
            "object-oriented programming",
            "oop",
            "functional programming",
        ],
    ),
    (
        "debugging",
        &[
            "debugging",
            "debugger",
            "troubleshooting",
            "root cause analysis",
            "rca",
            "stack trace",
            "gdb",
            "lldb",
            "breakpoints",
            "memory leak",
            "race condition",
            "crash analysis",
            "bug fixing",
            "bug triage",
            "incident investigation",
            "log analysis",
        ],
    ),
    (
        "testing",
        &[
            "testing",
            "unit testing",
            "unit tests",
            "integration testing",
            "end-to-end testing",
            "e2e",
            "test automation",
            "tdd",
            "test-driven development",
            "bdd",
            "qa",
            "quality assurance",
            "jest",
            "mocha",
            "pytest",
            "junit",
            "rspec",
            "cypress",
            "playwright",
            "selenium",
            "regression testing",
            "load testing",
            "test coverage",
            "mocking",
        ],
    ),
    (
        "version_control",
        &[
            "version control",
            "git",
            "github",
            "gitlab",
            "bitbucket",
            "svn",
            "subversion",
            "mercurial",
            "pull request",
            "pull requests",
            "code review",
            "merge conflicts",
            "branching strategy",
            "gitflow",
            "trunk-based development",
            "monorepo",
        ],
    ),
    (
        "data_structures",
        &[
            "data structures",
            "arrays",
            "linked list",
            "linked lists",
            "hash map",
            "hash table",
            "hashmap",
            "binary tree",
            "binary search tree",
            "trie",
            "heap",
            "priority queue",
            "stack",
            "queue",
            "graphs",
            "b-tree",
        ],
    ),
    (
        "algorithms",
        &[
            "algorithms",
            "algorithm design",
            "big o",
            "time complexity",
            "space complexity",
            "dynamic programming",
            "recursion",
            "sorting",
            "binary search",
            "graph algorithms",
            "breadth-first search",
            "depth-first search",
            "bfs",
            "dfs",
            "greedy algorithms",
            "leetcode",
            "competitive programming",
        ],
    ),
    (
        "system_design",
        &[
            "system design",
            "distributed systems",
            "scalability",
            "high availability",
            "fault tolerance",
            "load balancing",
            "load balancer",
            "sharding",
            "replication",
            "consistency",
            "cap theorem",
            "microservices",
            "event-driven architecture",
            "message queue",
            "kafka",
            "rabbitmq",
            "software architecture",
            "architecture",
            "design patterns",
        ],
    ),
    (
        "databases",
        &[
            "databases",
            "database",
            "sql",
            "nosql",
            "postgresql",
            "postgres",
            "mysql",
            "mariadb",
            "sqlite",
            "oracle",
            "sql server",
            "mongodb",
            "cassandra",
            "dynamodb",
            "redis",
            "elasticsearch",
            "neo4j",
            "query optimization",
            "indexing",
            "data modeling",
            "orm",
            "transactions",
        ],
    ),
    (
        "containers",
        &[
            "containers",
            "containerization",
            "docker",
            "dockerfile",
            "docker compose",
            "kubernetes",
            "k8s",
            "helm",
            "container orchestration",
            "orchestration",
            "openshift",
            "podman",
            "eks",
            "gke",
            "aks",
            "service mesh",
            "istio",
        ],
    ),
    (
        "cloud",
        &[
            "cloud",
            "cloud computing",
            "aws",
            "amazon web services",
            "azure",
            "gcp",
            "google cloud",
            "ec2",
            "s3",
            "lambda",
            "serverless",
            "cloud functions",
            "cloudformation",
            "heroku",
            "vercel",
            "netlify",
            "cloudflare",
            "iaas",
            "paas",
        ],
    ),
    (
        "devops",
        &[
            "devops",
            "ci/cd",
            "cicd",
            "continuous integration",
            "continuous delivery",
            "continuous deployment",
            "jenkins",
            "github actions",
            "gitlab ci",
            "circleci",
            "terraform",
            "ansible",
            "puppet",
            "chef",
            "infrastructure as code",
            "iac",
            "sre",
            "site reliability",
            "monitoring",
            "observability",
            "prometheus",
            "grafana",
            "datadog",
            "release engineering",
        ],
    ),
    (
        "security",
        &[
            "security",
            "cybersecurity",
            "application security",
            "appsec",
            "owasp",
            "penetration testing",
            "pentesting",
            "threat modeling",
            "vulnerability",
            "vulnerabilities",
            "encryption",
            "cryptography",
            "authentication",
            "authorization",
            "oauth",
            "jwt",
            "sso",
            "iam",
            "zero trust",
            "siem",
            "incident response",
            "secure coding",
        ],
    ),
    (
        "networking",
        &[
            "networking",
            "tcp/ip",
            "tcp",
            "udp",
            "http",
            "https",
            "dns",
            "dhcp",
            "bgp",
            "routing",
            "subnetting",
            "vpn",
            "firewall",
            "firewalls",
            "osi model",
            "network protocols",
            "cdn",
            "websockets",
            "packet capture",
            "wireshark",
        ],
    ),
    (
        "frontend",
        &[
            "frontend",
            "front-end",
            "front end",
            "react",
            "reactjs",
            "react.js",
            "angular",
            "vue",
            "vue.js",
            "svelte",
            "next.js",
            "nextjs",
            "nuxt",
            "html",
            "css",
            "sass",
            "tailwind",
            "redux",
            "web components",
            "accessibility",
            "a11y",
            "responsive design",
            "dom",
            "webpack",
            "vite",
        ],
    ),
    (
        "backend",
        &[
            "backend",
            "back-end",
            "back end",
            "server-side",
            "node.js",
            "nodejs",
            "express",
            "django",
            "flask",
            "fastapi",
            "spring",
            "spring boot",
            "rails",
            "ruby on rails",
            "laravel",
            ".net",
            "asp.net",
            "nestjs",
            "actix",
            "axum",
            "business logic",
            "web services",
        ],
    ),
    (
        "mobile",
        &[
            "mobile",
            "mobile development",
            "ios",
            "android",
            "react native",
            "flutter",
            "swiftui",
            "jetpack compose",
            "xamarin",
            "mobile apps",
            "app store",
            "google play",
            "xcode",
            "android studio",
        ],
    ),
    (
        "api_design",
        &[
            "api design",
            "api",
            "apis",
            "rest",
            "rest api",
            "restful",
            "graphql",
            "grpc",
            "protobuf",
            "openapi",
            "swagger",
            "api versioning",
            "webhooks",
            "rate limiting",
            "idempotency",
        ],
    ),
    (
        "performance",
        &[
            "performance",
            "performance optimization",
            "profiling",
            "profiler",
            "latency",
            "throughput",
            "caching",
            "cache",
            "benchmarking",
            "memory management",
            "concurrency",
            "multithreading",
            "parallelism",
            "web vitals",
            "optimization",
        ],
    ),
    (
        "machine_learning",
        &[
            "machine learning",
            "ml",
            "deep learning",
            "neural networks",
            "neural network",
            "artificial intelligence",
            "ai",
            "nlp",
            "natural language processing",
            "computer vision",
            "llm",
            "llms",
            "large language models",
            "transformers",
            "pytorch",
            "tensorflow",
            "keras",
            "scikit-learn",
            "sklearn",
            "xgboost",
            "random forest",
            "model training",
            "feature engineering",
            "mlops",
            "reinforcement learning",
            "prompt engineering",
        ],
    ),
    (
        "data_engineering",
        &[
            "data engineering",
            "data pipeline",
            "data pipelines",
            "etl",
            "elt",
            "data warehouse",
            "data warehousing",
            "data lake",
            "spark",
            "apache spark",
            "hadoop",
            "airflow",
            "dbt",
            "snowflake",
            "bigquery",
            "redshift",
            "databricks",
            "flink",
            "stream processing",
            "batch processing",
        ],
    ),
    (
        "data_analysis",
        &[
            "data analysis",
            "data analytics",
            "analytics",
            "statistics",
            "statistical analysis",
            "data visualization",
            "tableau",
            "power bi",
            "looker",
            "excel",
            "pandas",
            "numpy",
            "r programming",
            "regression analysis",
            "hypothesis testing",
            "dashboards",
            "reporting",
        ],
    ),
    // Product
    (
        "product_strategy",
        &[
            "product strategy",
            "product vision",
            "product management",
            "product-market fit",
            "product market fit",
            "go-to-market",
            "gtm",
            "competitive analysis",
            "market research",
            "value proposition",
            "business model",
            "product lifecycle",
            "product discovery",
        ],
    ),
    (
        "user_research",
        &[
            "user research",
            "ux research",
            "user interviews",
            "customer interviews",
            "usability testing",
            "personas",
            "user personas",
            "jobs to be done",
            "jtbd",
            "customer discovery",
            "surveys",
            "card sorting",
            "user feedback",
            "empathy map",
        ],
    ),
    (
        "roadmapping",
        &[
            "roadmap",
            "roadmaps",
            "roadmapping",
            "product roadmap",
            "release planning",
            "quarterly planning",
            "now next later",
            "milestones",
        ],
    ),
    (
        "prioritization",
        &[
            "prioritization",
            "prioritisation",
            "backlog",
            "backlog grooming",
            "backlog management",
            "rice",
            "moscow",
            "kano model",
            "trade-offs",
            "tradeoffs",
            "impact vs effort",
            "user stories",
        ],
    ),
    (
        "product_metrics",
        &[
            "product metrics",
            "kpi",
            "kpis",
            "north star metric",
            "a/b testing",
            "ab testing",
            "experimentation",
            "conversion rate",
            "retention",
            "churn",
            "dau",
            "mau",
            "funnel analysis",
            "cohort analysis",
            "product analytics",
            "mixpanel",
            "amplitude",
        ],
    ),
    (
        "ux_design",
        &[
            "ux design",
            "ux",
            "ui/ux",
            "ui design",
            "user experience",
            "interaction design",
            "wireframes",
            "wireframing",
            "prototyping",
            "figma",
            "sketch",
            "adobe xd",
            "design systems",
            "design system",
            "information architecture",
            "visual design",
        ],
    ),
    // Business
    (
        "business_acumen",
        &[
            "business acumen",
            "business strategy",
            "p&l",
            "profit and loss",
            "revenue",
            "unit economics",
            "market sizing",
            "business case",
            "commercial awareness",
            "business development",
        ],
    ),
    (
        "financial_analysis",
        &[
            "financial analysis",
            "financial modeling",
            "financial modelling",
            "forecasting",
            "budgeting",
            "fp&a",
            "valuation",
            "dcf",
            "accounting",
            "gaap",
            "ifrs",
            "cash flow",
            "variance analysis",
        ],
    ),
    (
        "operations",
        &[
            "operations",
            "operations management",
            "supply chain",
            "logistics",
            "procurement",
            "vendor management",
            "process improvement",
            "lean",
            "six sigma",
            "inventory management",
            "sop",
            "business operations",
        ],
    ),
    (
        "project_management",
        &[
            "project management",
            "program management",
            "agile",
            "scrum",
            "kanban",
            "waterfall",
            "sprint planning",
            "jira",
            "asana",
            "pmp",
            "prince2",
            "gantt",
            "risk management",
            "resource planning",
            "delivery management",
        ],
    ),
    (
        "stakeholder_management",
        &[
            "stakeholder management",
            "stakeholders",
            "stakeholder",
            "executive communication",
            "cross-functional",
            "cross functional",
            "alignment",
            "managing up",
            "expectation management",
            "client management",
        ],
    ),
    (
        "strategic_planning",
        &[
            "strategic planning",
            "strategy",
            "okrs",
            "okr",
            "swot",
            "long-term planning",
            "competitive strategy",
            "corporate strategy",
            "scenario planning",
        ],
    ),
    // Sales & Marketing
    (
        "sales",
        &[
            "sales",
            "b2b sales",
            "b2c sales",
            "saas sales",
            "closing",
            "quota",
            "pipeline management",
            "sales pipeline",
            "crm",
            "salesforce",
            "hubspot",
            "account management",
            "cold calling",
            "solution selling",
            "enterprise sales",
            "upselling",
        ],
    ),
    (
        "negotiation",
        &[
            "negotiation",
            "negotiating",
            "contract negotiation",
            "deal structuring",
            "pricing",
            "objection handling",
            "persuasion",
        ],
    ),
    (
        "digital_marketing",
        &[
            "digital marketing",
            "seo",
            "sem",
            "ppc",
            "google ads",
            "paid acquisition",
            "email marketing",
            "social media marketing",
            "content marketing",
            "growth marketing",
            "growth hacking",
            "marketing automation",
            "google analytics",
            "performance marketing",
        ],
    ),
    (
        "brand_marketing",
        &[
            "brand marketing",
            "branding",
            "brand strategy",
            "brand identity",
            "marketing campaigns",
            "copywriting",
            "public relations",
            "pr",
            "messaging",
            "positioning",
            "storytelling",
        ],
    ),
    (
        "customer_success",
        &[
            "customer success",
            "customer support",
            "customer service",
            "customer experience",
            "onboarding",
            "account health",
            "renewals",
            "nps",
            "customer satisfaction",
            "csat",
            "zendesk",
        ],
    ),
    (
        "lead_generation",
        &[
            "lead generation",
            "lead gen",
            "prospecting",
            "outbound",
            "inbound",
            "demand generation",
            "sdr",
            "bdr",
            "lead qualification",
            "mql",
            "sql leads",
        ],
    ),
    // Soft skills
    (
        "communication",
        &[
            "communication",
            "communication skills",
            "written communication",
            "verbal communication",
            "presentation",
            "presentations",
            "public speaking",
            "active listening",
            "technical writing",
            "documentation",
            "explaining",
            "articulate",
        ],
    ),
    (
        "problem_solving",
        &[
            "problem solving",
            "problem-solving",
            "analytical thinking",
            "analytical skills",
            "troubleshooting skills",
            "creative solutions",
            "first principles",
            "structured thinking",
            "resourcefulness",
        ],
    ),
    (
        "collaboration",
        &[
            "collaboration",
            "collaborative",
            "teamwork",
            "team player",
            "team work",
            "cross-team",
            "working with others",
            "partnering",
            "interpersonal skills",
        ],
    ),
    (
        "adaptability",
        &[
            "adaptability",
            "adaptable",
            "flexibility",
            "flexible",
            "ambiguity",
            "fast-paced",
            "fast paced",
            "learning agility",
            "growth mindset",
            "resilience",
            "change management",
        ],
    ),
    (
        "work_ethic",
        &[
            "work ethic",
            "ownership",
            "accountability",
            "reliability",
            "dependable",
            "self-motivated",
            "self-starter",
            "initiative",
            "attention to detail",
            "detail-oriented",
            "integrity",
            "bias for action",
        ],
    ),
    (
        "leadership",
        &[
            "leadership",
            "leading teams",
            "team lead",
            "tech lead",
            "people management",
            "managing teams",
            "hiring",
            "decision making",
            "decision-making",
            "vision setting",
            "influence",
            "delegation",
        ],
    ),
    (
        "time_management",
        &[
            "time management",
            "deadlines",
            "multitasking",
            "organization",
            "organizational skills",
            "planning",
            "scheduling",
            "punctuality",
        ],
    ),
    (
        "critical_thinking",
        &[
            "critical thinking",
            "judgment",
            "judgement",
            "reasoning",
            "evaluating evidence",
            "logical thinking",
            "skepticism",
            "sound judgment",
        ],
    ),
    (
        "conflict_resolution",
        &[
            "conflict resolution",
            "conflict management",
            "resolving conflict",
            "mediation",
            "disagreement",
            "difficult conversations",
            "de-escalation",
        ],
    ),
    (
        "mentoring",
        &[
            "mentoring",
            "mentorship",
            "mentor",
            "coaching",
            "onboarding new hires",
            "knowledge sharing",
            "training others",
            "career development",
        ],
    ),
    // Domain expertise
    (
        "healthcare",
        &[
            "healthcare",
            "health care",
            "clinical",
            "hipaa",
            "ehr",
            "emr",
            "hl7",
            "fhir",
            "medical devices",
            "patient care",
            "telehealth",
            "pharma",
            "life sciences",
        ],
    ),
    (
        "fintech",
        &[
            "fintech",
            "financial services",
            "banking",
            "payments",
            "payment processing",
            "trading",
            "capital markets",
            "insurance",
            "lending",
            "credit risk",
            "blockchain",
            "cryptocurrency",
            "kyc",
            "aml",
            "pci dss",
        ],
    ),
    (
        "legal_compliance",
        &[
            "compliance",
            "legal",
            "regulatory",
            "regulation",
            "gdpr",
            "ccpa",
            "sox",
            "soc 2",
            "iso 27001",
            "audit",
            "audits",
            "data privacy",
            "privacy",
            "governance",
            "risk and compliance",
        ],
    ),
    (
        "ecommerce",
        &[
            "ecommerce",
            "e-commerce",
            "online retail",
            "shopify",
            "magento",
            "woocommerce",
            "checkout",
            "shopping cart",
            "marketplace",
            "fulfillment",
            "merchandising",
            "retail",
        ],
    ),
    (
        "education_tech",
        &[
            "edtech",
            "education",
            "e-learning",
            "elearning",
            "learning management system",
            "lms",
            "curriculum",
            "instructional design",
            "teaching",
            "moodle",
        ],
    ),
    // Gaming
    (
        "game_design",
        &[
            "game design",
            "game designer",
            "game mechanics",
            "gameplay",
            "core loop",
            "player experience",
            "systems design",
            "narrative design",
            "game balance",
            "balancing",
            "playtesting",
        ],
    ),
    (
        "game_engines",
        &[
            "game engine",
            "game engines",
            "unity",
            "unity3d",
            "unreal",
            "unreal engine",
            "ue4",
            "ue5",
            "godot",
            "cryengine",
            "game development",
            "gamedev",
            "blueprints",
        ],
    ),
    (
        "graphics_programming",
        &[
            "graphics programming",
            "computer graphics",
            "rendering",
            "shaders",
            "shader",
            "hlsl",
            "glsl",
            "opengl",
            "vulkan",
            "directx",
            "metal",
            "webgl",
            "gpu programming",
            "ray tracing",
        ],
    ),
    (
        "level_design",
        &[
            "level design",
            "level designer",
            "world building",
            "worldbuilding",
            "encounter design",
            "greyboxing",
            "blockout",
            "pacing",
        ],
    ),
    (
        "game_monetization",
        &[
            "game monetization",
            "monetization",
            "free-to-play",
            "f2p",
            "in-app purchases",
            "iap",
            "live ops",
            "liveops",
            "battle pass",
            "game economy",
            "virtual economy",
            "gacha",
        ],
    ),
    (
        "multiplayer_networking",
        &[
            "multiplayer",
            "multiplayer networking",
            "netcode",
            "matchmaking",
            "lag compensation",
            "client-side prediction",
            "rollback netcode",
            "dedicated servers",
            "game servers",
            "photon",
        ],
    ),
];
