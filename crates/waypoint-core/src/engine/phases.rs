//! The fixed delivery-lifecycle phase template.

/// A (title, description) pair in the phase template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub title: &'static str,
    pub description: &'static str,
}

/// Plans of at least this many days use the full template.
pub const FULL_TEMPLATE_MIN_DAYS: i64 = 10;

/// Phase count used for plans shorter than [`FULL_TEMPLATE_MIN_DAYS`].
pub const SHORT_TEMPLATE_LEN: usize = 4;

/// Canonical phase order. Titles double as dependency anchors.
pub const PHASES: [Phase; 6] = [
    Phase {
        title: "Define scope & success metrics",
        description: "Clarify goal, success metrics, target audience, and constraints.",
    },
    Phase {
        title: "Design & plan",
        description: "Create designs, wireframes or implementation plans.",
    },
    Phase {
        title: "Implementation",
        description: "Develop core functionality and integrate components.",
    },
    Phase {
        title: "Testing & QA",
        description: "Test features, fix bugs, and verify performance.",
    },
    Phase {
        title: "Deployment & Launch",
        description: "Deploy to production and run launch checklist.",
    },
    Phase {
        title: "Post-launch monitoring",
        description: "Monitor usage, collect feedback, and iterate.",
    },
];

/// Selects the template prefix for a plan of `days` days.
pub fn select_phases(days: i64) -> &'static [Phase] {
    if days >= FULL_TEMPLATE_MIN_DAYS {
        &PHASES
    } else {
        &PHASES[..SHORT_TEMPLATE_LEN]
    }
}
