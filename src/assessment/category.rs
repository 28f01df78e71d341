//! The fixed category catalog and current-category resolution.

/// The six assessment categories, in interview order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    BusinessEnvironment,
    PreviousImplementation,
    CurrentTechnology,
    ImprovementOpportunities,
    SoftwareDetails,
    ClosingQuestions,
}

impl CategoryId {
    pub const ALL: [CategoryId; 6] = [
        CategoryId::BusinessEnvironment,
        CategoryId::PreviousImplementation,
        CategoryId::CurrentTechnology,
        CategoryId::ImprovementOpportunities,
        CategoryId::SoftwareDetails,
        CategoryId::ClosingQuestions,
    ];

    /// The identifier used as the key into `information_status`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::BusinessEnvironment => "business_environment",
            CategoryId::PreviousImplementation => "previous_implementation",
            CategoryId::CurrentTechnology => "current_technology",
            CategoryId::ImprovementOpportunities => "improvement_opportunities",
            CategoryId::SoftwareDetails => "software_details",
            CategoryId::ClosingQuestions => "closing_questions",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryId::BusinessEnvironment => "Business Environment",
            CategoryId::PreviousImplementation => "Previous Implementation",
            CategoryId::CurrentTechnology => "Current Technology Usage",
            CategoryId::ImprovementOpportunities => "Improvement Opportunities",
            CategoryId::SoftwareDetails => "Software-Specific Details",
            CategoryId::ClosingQuestions => "Closing Questions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CategoryId::BusinessEnvironment => {
                "Business concerns, motivations, and decision-making processes"
            }
            CategoryId::PreviousImplementation => "Past system implementations and experiences",
            CategoryId::CurrentTechnology => "Existing software systems and technology usage",
            CategoryId::ImprovementOpportunities => "Areas for enhancement and automation",
            CategoryId::SoftwareDetails => "Detailed assessment of each software system",
            CategoryId::ClosingQuestions => "Final insights and additional information",
        }
    }

    /// Child fields tracked in the sidebar, as `(key, label)` pairs.
    /// Software details has no fixed children; its fields come from the
    /// software the client names during the interview.
    pub fn children(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            CategoryId::BusinessEnvironment => &[
                ("business_concerns", "Define biggest business concerns"),
                ("motivation_for_change", "Motivation for technology assessment"),
                ("decision_makers", "Key decision makers identified"),
                ("approval_process", "Capital project approval process"),
            ],
            CategoryId::PreviousImplementation => &[
                ("last_implementation", "Last system implementation experience"),
                ("support_quality", "Service provider support assessment"),
                ("promise_delivery", "Current systems promise fulfillment"),
                ("success_criteria", "Future implementation success criteria"),
                ("regrettable_decisions", "Regrettable system decisions"),
            ],
            CategoryId::CurrentTechnology => &[
                (
                    "email_document_environment",
                    "Email and document management environment",
                ),
                ("software_inventory", "Complete software systems inventory"),
                ("committed_systems", "Non-changeable committed systems"),
                ("data_storage", "Business data storage and security"),
                ("frustrating_systems", "Most frustrating systems identification"),
                ("customer_experience", "Website and systems customer experience"),
            ],
            CategoryId::ImprovementOpportunities => &[
                (
                    "improvement_inspiration",
                    "Recent improvement opportunities identified",
                ),
                ("automation_candidates", "Manual tasks for automation"),
                (
                    "process_support_assessment",
                    "Business process support ratings",
                ),
                ("technology_leverage", "Technology leverage opportunities"),
                (
                    "systems_partner_interest",
                    "Business Systems Partner consideration",
                ),
            ],
            CategoryId::SoftwareDetails => &[],
            CategoryId::ClosingQuestions => &[
                ("additional_information", "Additional information from client"),
                ("client_questions", "Questions from client"),
            ],
        }
    }
}

/// Alternate spellings the agent uses for category labels, lowercased.
const LABEL_TABLE: &[(&str, CategoryId)] = &[
    ("business_environment", CategoryId::BusinessEnvironment),
    ("previous_implementation", CategoryId::PreviousImplementation),
    (
        "assessing previous implementation",
        CategoryId::PreviousImplementation,
    ),
    ("current_technology", CategoryId::CurrentTechnology),
    ("current technology usage", CategoryId::CurrentTechnology),
    (
        "improvement_opportunities",
        CategoryId::ImprovementOpportunities,
    ),
    (
        "opportunities for improvement",
        CategoryId::ImprovementOpportunities,
    ),
    ("software_details", CategoryId::SoftwareDetails),
    ("software-specific details", CategoryId::SoftwareDetails),
    ("closing_questions", CategoryId::ClosingQuestions),
    ("closing questions", CategoryId::ClosingQuestions),
];

/// Map the agent's free-text current-category label onto a fixed id.
///
/// Exact table match first, then substring containment in either direction
/// as a fallback ("Software-Specific Details - CRM" resolves through
/// containment). Unmatched text resolves to `None` rather than guessing.
pub fn resolve_current_category(label: &str) -> Option<CategoryId> {
    let needle = label.to_lowercase();

    for (key, id) in LABEL_TABLE {
        if needle == *key {
            return Some(*id);
        }
    }

    for (key, id) in LABEL_TABLE {
        if needle.contains(key) || needle.contains(id.as_str()) {
            return Some(*id);
        }
    }

    None
}
