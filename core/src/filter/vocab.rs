//! Codes offered by the filter form.

pub const SOCIAL_TYPES: [(&str, &str); 6] = [
    ("INST", "Instagram"),
    ("FB", "Facebook"),
    ("TW", "Twitter"),
    ("YT", "YouTube"),
    ("TT", "TikTok"),
    ("TG", "Telegram"),
];

pub const AGE_BUCKETS: [&str; 8] = [
    "0_18", "18_21", "21_24", "24_27", "27_30", "30_35", "35_45", "45+",
];

pub const GENDERS: [(&str, &str); 2] = [("m", "Male"), ("f", "Female")];

pub fn social_type_label(code: &str) -> Option<&'static str> {
    SOCIAL_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// `18_21` -> `18-21`, the way the age chips are labelled.
pub fn age_bucket_label(code: &str) -> String {
    code.replacen('_', "-", 1)
}
