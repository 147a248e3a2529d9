//! Fixed keyword and major lists the substring heuristics match against.
//! Kept as named exported constants so tests can enumerate them exactly;
//! changing an entry changes scoring output for every consumer.

/// Majors treated as high labor-market demand (+35 education bonus).
pub const HIGH_DEMAND_MAJORS: &[&str] = &[
    "computer science",
    "engineering",
    "nursing",
    "mathematics",
    "physics",
    "data science",
];

/// Majors treated as moderate demand (+25 education bonus).
pub const MODERATE_DEMAND_MAJORS: &[&str] = &[
    "business",
    "biology",
    "chemistry",
    "economics",
    "education",
    "psychology",
];

/// Ethnicity substrings that earn the underrepresented-background bonus.
pub const UNDERREPRESENTED_ETHNICITIES: &[&str] = &[
    "african american",
    "black",
    "hispanic",
    "latino",
    "native american",
    "pacific islander",
    "indigenous",
];

/// Gender substrings that earn the women-in-education bonus.
pub const FEMALE_GENDER_MARKERS: &[&str] = &["female", "woman"];

/// Essay keyword groups; each group whose any member appears in the essay
/// text earns +5.
pub const ESSAY_KEYWORD_GROUPS: &[&[&str]] = &[
    &["goal", "aspiration"],
    &["challenge", "overcome"],
    &["community", "service"],
    &["leadership", "lead"],
    &["impact", "difference"],
];

/// Duration substrings indicating a sustained commitment (+3 per activity).
pub const LONG_DURATION_MARKERS: &[&str] = &["year", "semester"];

/// Case-insensitive "does `haystack` contain any of `needles`".
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let lowered = haystack.to_lowercase();
    needles.iter().any(|needle| lowered.contains(needle))
}
