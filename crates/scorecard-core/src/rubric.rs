//! The scoring rubric: 8 categories, 21 subcriteria, 100 points.
//!
//! The rubric is static and process-wide. Scoring semantics only live here
//! (ids, maxima, guidance text, exemplars); presentation concerns belong to
//! whatever front end renders the rubric.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ScorecardError;

/// Closed enumeration of every subcriterion id in the rubric.
///
/// Score maps are keyed by this type, so a score can never reference a
/// criterion the rubric does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubcriterionId {
    ProblemSeverity,
    IcpSpecificity,
    MarketEvidence,
    AiAutonomy,
    E2eCompleteness,
    DemoExecution,
    RoiQuantification,
    AccuracyMetrics,
    EvalMethodology,
    SystemStability,
    AiFailureHandling,
    IntegrationPoints,
    OnboardingFriction,
    DataHandling,
    AuditTrail,
    ComplianceReadiness,
    RevenueModel,
    UnitEconomics,
    GtmStrategy,
    MoatIdentification,
    MoatEvidence,
}

impl SubcriterionId {
    /// All subcriterion ids in rubric order.
    pub const ALL: [SubcriterionId; 21] = [
        SubcriterionId::ProblemSeverity,
        SubcriterionId::IcpSpecificity,
        SubcriterionId::MarketEvidence,
        SubcriterionId::AiAutonomy,
        SubcriterionId::E2eCompleteness,
        SubcriterionId::DemoExecution,
        SubcriterionId::RoiQuantification,
        SubcriterionId::AccuracyMetrics,
        SubcriterionId::EvalMethodology,
        SubcriterionId::SystemStability,
        SubcriterionId::AiFailureHandling,
        SubcriterionId::IntegrationPoints,
        SubcriterionId::OnboardingFriction,
        SubcriterionId::DataHandling,
        SubcriterionId::AuditTrail,
        SubcriterionId::ComplianceReadiness,
        SubcriterionId::RevenueModel,
        SubcriterionId::UnitEconomics,
        SubcriterionId::GtmStrategy,
        SubcriterionId::MoatIdentification,
        SubcriterionId::MoatEvidence,
    ];

    /// The stable snake_case id string used in CSV exports and AI prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            SubcriterionId::ProblemSeverity => "problem_severity",
            SubcriterionId::IcpSpecificity => "icp_specificity",
            SubcriterionId::MarketEvidence => "market_evidence",
            SubcriterionId::AiAutonomy => "ai_autonomy",
            SubcriterionId::E2eCompleteness => "e2e_completeness",
            SubcriterionId::DemoExecution => "demo_execution",
            SubcriterionId::RoiQuantification => "roi_quantification",
            SubcriterionId::AccuracyMetrics => "accuracy_metrics",
            SubcriterionId::EvalMethodology => "eval_methodology",
            SubcriterionId::SystemStability => "system_stability",
            SubcriterionId::AiFailureHandling => "ai_failure_handling",
            SubcriterionId::IntegrationPoints => "integration_points",
            SubcriterionId::OnboardingFriction => "onboarding_friction",
            SubcriterionId::DataHandling => "data_handling",
            SubcriterionId::AuditTrail => "audit_trail",
            SubcriterionId::ComplianceReadiness => "compliance_readiness",
            SubcriterionId::RevenueModel => "revenue_model",
            SubcriterionId::UnitEconomics => "unit_economics",
            SubcriterionId::GtmStrategy => "gtm_strategy",
            SubcriterionId::MoatIdentification => "moat_identification",
            SubcriterionId::MoatEvidence => "moat_evidence",
        }
    }
}

impl fmt::Display for SubcriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubcriterionId {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubcriterionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ScorecardError::UnknownSubcriterion(s.to_string()))
    }
}

/// Smallest scored unit. Belongs to exactly one category.
#[derive(Debug, Clone)]
pub struct Subcriterion {
    pub id: SubcriterionId,
    pub name: &'static str,
    /// Integer point ceiling for this subcriterion.
    pub max: u32,
    /// Guidance shown to judges and embedded in the AI prompt.
    pub description: &'static str,
    /// Exemplar answer that would earn a high score.
    pub excellent: &'static str,
    /// Exemplar answer that would earn a low score.
    pub weak: &'static str,
}

/// Named group of subcriteria whose ceilings sum to the category maximum.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub max_points: u32,
    pub description: &'static str,
    pub subcriteria: Vec<Subcriterion>,
}

fn problem_category() -> Category {
    Category {
        id: "problem",
        name: "1. Problem + ICP Clarity",
        max_points: 15,
        description: "How well the team has identified a real, painful problem and defined exactly who experiences it.",
        subcriteria: vec![
            Subcriterion {
                id: SubcriterionId::ProblemSeverity,
                name: "Problem Severity",
                max: 5,
                description: "How urgent and painful the problem is for customers. Quantified pain in dollars or hours beats vague claims.",
                excellent: "\"Procurement teams spend 40+ hours/month calling dealers. This costs $8,000/month in labor.\"",
                weak: "\"We think businesses struggle with efficiency.\"",
            },
            Subcriterion {
                id: SubcriterionId::IcpSpecificity,
                name: "ICP Specificity",
                max: 5,
                description: "How precisely the team can describe their ideal first customer: job title, company size, vertical.",
                excellent: "\"Parts procurement managers at equipment rental companies with 50-500 employees\"",
                weak: "\"Businesses that want to be more efficient\"",
            },
            Subcriterion {
                id: SubcriterionId::MarketEvidence,
                name: "Market Evidence",
                max: 5,
                description: "Whether real customers have validated that they want this solution: interviews, quotes, waitlists.",
                excellent: "\"We interviewed 15 managers. 12 said they would pay immediately.\"",
                weak: "\"We haven't talked to customers yet but we're confident.\"",
            },
        ],
    }
}

fn automation_category() -> Category {
    Category {
        id: "automation",
        name: "2. Automation Depth + Demo",
        max_points: 20,
        description: "Technical sophistication of the AI automation and quality of the live demonstration.",
        subcriteria: vec![
            Subcriterion {
                id: SubcriterionId::AiAutonomy,
                name: "AI Autonomy Level",
                max: 7,
                description: "How much the AI does independently versus requiring human guidance. Full automation beats a thin wrapper.",
                excellent: "\"AI automatically scrapes catalogs, parses PDFs, reconstructs the matrix without human intervention.\"",
                weak: "\"User types a question, the app sends it to a chatbot, displays the response.\"",
            },
            Subcriterion {
                id: SubcriterionId::E2eCompleteness,
                name: "End-to-End Completeness",
                max: 7,
                description: "Whether the solution handles the complete workflow from trigger to usable output.",
                excellent: "\"Input: part number. Process: search 50+ databases. Output: CSV ready for ERP import.\"",
                weak: "\"AI analyzes data and provides insights.\"",
            },
            Subcriterion {
                id: SubcriterionId::DemoExecution,
                name: "Live Demo Execution",
                max: 6,
                description: "How well the live demonstration runs: real data, fast responses, confident presenter.",
                excellent: "Live demo with real data, sub-3-second responses, handles spontaneous requests.",
                weak: "Demo crashes, presenter says \"imagine this would show...\"",
            },
        ],
    }
}

fn roi_category() -> Category {
    Category {
        id: "roi",
        name: "3. Measured ROI + Evaluation",
        max_points: 15,
        description: "Whether the team can prove their solution delivers value.",
        subcriteria: vec![
            Subcriterion {
                id: SubcriterionId::RoiQuantification,
                name: "ROI Quantification",
                max: 6,
                description: "Specific value delivered: time saved, cost reduced, revenue increased, before/after comparison.",
                excellent: "\"45 minutes to 3 seconds. At $60/hr, saves $44.50 per lookup = $46K/year.\"",
                weak: "\"Makes businesses more efficient.\"",
            },
            Subcriterion {
                id: SubcriterionId::AccuracyMetrics,
                name: "Accuracy/Quality Metrics",
                max: 5,
                description: "Quantified AI accuracy: precision, error rate, confidence scoring, baseline comparison.",
                excellent: "\"94% accuracy on a 500-lookup test set. 6% flagged as uncertain.\"",
                weak: "\"We haven't measured this yet.\"",
            },
            Subcriterion {
                id: SubcriterionId::EvalMethodology,
                name: "Evaluation Methodology",
                max: 4,
                description: "Rigor of the testing approach: large diverse test set, ground-truth verification.",
                excellent: "\"500 part lookups, 10 equipment types, verified by 2 specialists.\"",
                weak: "\"We tried it on a few examples and it worked.\"",
            },
        ],
    }
}

fn reliability_category() -> Category {
    Category {
        id: "reliability",
        name: "4. Reliability + Failure Handling",
        max_points: 10,
        description: "System stability and graceful handling of AI uncertainty.",
        subcriteria: vec![
            Subcriterion {
                id: SubcriterionId::SystemStability,
                name: "System Stability",
                max: 5,
                description: "Basic technical reliability: consistent response times, no crashes, load tested, recovers from failure.",
                excellent: "\"2.3 second average response, 99.9% uptime, load tested with 50 concurrent users.\"",
                weak: "Demo crashes, \"it usually works better than this.\"",
            },
            Subcriterion {
                id: SubcriterionId::AiFailureHandling,
                name: "AI Failure Handling",
                max: 5,
                description: "How the system handles AI uncertainty: visible confidence, flagged results, human review queue.",
                excellent: "\"Results show confidence %. Below 80% marked 'Needs Review'. Users can flag errors.\"",
                weak: "All results shown with the same confidence, no warnings.",
            },
        ],
    }
}

fn integrations_category() -> Category {
    Category {
        id: "integrations",
        name: "5. Integrations + Adoption Ease",
        max_points: 10,
        description: "How easily the product fits into existing workflows.",
        subcriteria: vec![
            Subcriterion {
                id: SubcriterionId::IntegrationPoints,
                name: "Integration Points",
                max: 5,
                description: "How well the product connects to existing tools: exports, imports, workflow integrations.",
                excellent: "\"CSV export for ERP, API available, Slack notifications, Chrome extension.\"",
                weak: "\"Users can copy/paste from the dashboard.\"",
            },
            Subcriterion {
                id: SubcriterionId::OnboardingFriction,
                name: "Onboarding Friction",
                max: 5,
                description: "How quickly a new user gets value: time to first value, IT involvement, training needed.",
                excellent: "\"Paste a part number, get results in 3 seconds. No account needed for a trial.\"",
                weak: "\"Schedule an onboarding call, IT configures SSO, 2-week implementation.\"",
            },
        ],
    }
}

fn security_category() -> Category {
    Category {
        id: "security",
        name: "6. Security/Compliance/Audit",
        max_points: 10,
        description: "Data protection, compliance awareness, and auditability of AI decisions.",
        subcriteria: vec![
            Subcriterion {
                id: SubcriterionId::DataHandling,
                name: "Data Handling",
                max: 4,
                description: "How carefully user data is handled: storage location, encryption, access controls, retention.",
                excellent: "\"TLS 1.3 + AES-256. US-West AWS. 90-day retention. User-controlled deletion.\"",
                weak: "\"Haven't thought about that yet.\"",
            },
            Subcriterion {
                id: SubcriterionId::AuditTrail,
                name: "Audit Trail",
                max: 4,
                description: "Whether AI decisions can be traced and reviewed later: logged inputs/outputs, timestamps, sources.",
                excellent: "\"Full audit log: query, response, confidence, sources, timestamp. Exportable.\"",
                weak: "\"We don't save any data.\"",
            },
            Subcriterion {
                id: SubcriterionId::ComplianceReadiness,
                name: "Compliance Readiness",
                max: 2,
                description: "Awareness of relevant compliance frameworks, disclaimers, and a roadmap toward them.",
                excellent: "\"SOC 2 Type 1 in progress. GDPR compliant. Clear 'not legal advice' disclaimer.\"",
                weak: "\"Haven't thought about compliance.\"",
            },
        ],
    }
}

fn business_category() -> Category {
    Category {
        id: "business",
        name: "7. Business Model + GTM",
        max_points: 15,
        description: "Viable path to revenue and customer acquisition.",
        subcriteria: vec![
            Subcriterion {
                id: SubcriterionId::RevenueModel,
                name: "Revenue Model Clarity",
                max: 5,
                description: "Specific, defensible pricing with value-based logic and validated willingness to pay.",
                excellent: "\"$99/seat/month. Saves $600/month of value. 3 pilots agreed to this price.\"",
                weak: "\"We'll figure out pricing later.\"",
            },
            Subcriterion {
                id: SubcriterionId::UnitEconomics,
                name: "Unit Economics",
                max: 5,
                description: "Understanding of the cost structure: cost per transaction, gross margin, CAC/LTV.",
                excellent: "\"$0.02/lookup API cost. 200 lookups/month = $4. At $99 price = 96% margin.\"",
                weak: "\"Haven't calculated costs yet.\"",
            },
            Subcriterion {
                id: SubcriterionId::GtmStrategy,
                name: "Go-to-Market Strategy",
                max: 5,
                description: "A specific acquisition channel and first narrow segment, with sequenced steps.",
                excellent: "\"Phase 1: LinkedIn outreach to procurement managers at CAT dealers. Phase 2: distributor partnerships.\"",
                weak: "\"Word of mouth will spread.\"",
            },
        ],
    }
}

fn defensibility_category() -> Category {
    Category {
        id: "defensibility",
        name: "8. Defensibility",
        max_points: 5,
        description: "Sustainable competitive advantage.",
        subcriteria: vec![
            Subcriterion {
                id: SubcriterionId::MoatIdentification,
                name: "Moat Identification",
                max: 3,
                description: "A credible source of long-term advantage: data moat, network effects, switching costs.",
                excellent: "\"Every lookup improves our database. After 100K lookups, competitors can't replicate.\"",
                weak: "\"Our moat is our team.\"",
            },
            Subcriterion {
                id: SubcriterionId::MoatEvidence,
                name: "Moat Evidence",
                max: 2,
                description: "Whether the claimed moat exists today, with measurable progress.",
                excellent: "\"50,000 mappings already. Growing 1,000/week. 2 distributor partnerships signed.\"",
                weak: "No evidence of moat building.",
            },
        ],
    }
}

static RUBRIC: OnceLock<Vec<Category>> = OnceLock::new();

/// The static process-wide rubric.
///
/// Invariant: the subcriterion maxima across all categories sum to 100.
pub fn rubric() -> &'static [Category] {
    RUBRIC.get_or_init(|| {
        vec![
            problem_category(),
            automation_category(),
            roi_category(),
            reliability_category(),
            integrations_category(),
            security_category(),
            business_category(),
            defensibility_category(),
        ]
    })
}

/// All subcriteria across all categories, in rubric order.
pub fn subcriteria() -> impl Iterator<Item = &'static Subcriterion> {
    rubric().iter().flat_map(|c| c.subcriteria.iter())
}

/// Look up a subcriterion definition by id.
pub fn subcriterion(id: SubcriterionId) -> &'static Subcriterion {
    // Every id in the closed enum appears in the rubric exactly once.
    subcriteria()
        .find(|s| s.id == id)
        .unwrap_or_else(|| unreachable!("rubric covers every SubcriterionId"))
}

/// Point ceiling for a subcriterion.
pub fn max_for(id: SubcriterionId) -> u32 {
    subcriterion(id).max
}
