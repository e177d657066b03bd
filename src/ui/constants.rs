// Fixed UI copy

/// Onboarding pages: (title, subtitle)
pub const ONBOARDING_PAGES: &[(&str, &str)] = &[
    (
        "Track house chores easily",
        "See what needs to be done today in one glance.",
    ),
    (
        "Share responsibilities fairly",
        "Assign chores to roommates and keep things balanced.",
    ),
    (
        "Stay organized with reminders",
        "Keep your shared home tidy without arguments.",
    ),
];

pub const APP_TAGLINE: &str = "Manage shared house chores fairly and easily";

pub const ANNOUNCEMENT: &str = "Keep your shared space organized by completing your assigned chores. Track progress and earn points!";

/// Code filled in by the demo shortcut on the join screen
pub const DEMO_FILL_CODE: &str = "HOUSE123";

pub const INVALID_CODE_MESSAGE: &str = "Invalid invite code. Please check and try again.";
