use std::time::Duration;

pub const SITE_TITLE: &str = "Portfolio";

/// Recipient of every mail handoff built by the contact form.
pub const CONTACT_RECIPIENT: &str = "montenegrokarlo@gmail.com";
pub const CONTACT_SUBJECT_PREFIX: &str = "Portfolio Contact from";

pub const GITHUB_URL: &str = "https://github.com";

/// Time between dispatching the mail handoff and showing the success state.
pub const HANDOFF_DELAY: Duration = Duration::from_millis(500);
/// Time the success state stays on screen before the modal closes.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(1500);

pub const TECH_STACK: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "HTML5 & CSS3",
    "React / Next.js",
    "C++",
    "Git",
    "SQL",
];

/// (icon class, label) pairs for the about section tiles.
pub const FOCUS_TILES: &[(&str, &str)] = &[
    ("icon-code", "Frontend Dev"),
    ("icon-database", "Backend Logic"),
    ("icon-globe", "Web Tech"),
    ("icon-cpu", "CS Fundamentals"),
];

/// (title, description) pairs for the academic focus list.
pub const ACADEMIC_FOCUS: &[(&str, &str)] = &[
    (
        "User Interface (UI)",
        "Designing modern and accessible layouts.",
    ),
    (
        "User Experience (UX)",
        "Optimizing user journeys and interaction.",
    ),
];

/// Document title for a page, suffixed with the site name unless it is the site name.
pub fn page_title(title: &str) -> String {
    if title.is_empty() || title == SITE_TITLE {
        SITE_TITLE.to_string()
    } else {
        format!("{title} | {SITE_TITLE}")
    }
}

/// Year the site was built, used for the footer copyright line.
pub fn build_year() -> i32 {
    use chrono::{DateTime, Datelike, Utc};
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year())
}
