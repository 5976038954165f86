//! Plain-text rendering of a result page.

use std::fmt::Write;

use scout_core::api::{InfluencerRecord, Pager};

pub const EMPTY_MESSAGE: &str = "No influencers found matching the current filters.";

/// `1234567` -> `1,234,567`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn thousands_f64(v: f64) -> String {
    if v.is_finite() && v >= 0.0 {
        thousands(v.round() as u64)
    } else {
        "N/A".to_string()
    }
}

fn or_dash(v: &Option<String>) -> &str {
    v.as_deref().filter(|s| !s.is_empty()).unwrap_or("-")
}

pub fn render_card(r: &InfluencerRecord) -> String {
    let mut out = String::new();
    let badge = if r.verified { "Verified" } else { "Not Verified" };
    let _ = writeln!(out, "{} (@{})", r.name, r.screen_name);
    let _ = writeln!(out, "  {} | {}", r.platform_label(), badge);
    if let Some(desc) = r.description.as_deref().filter(|d| !d.trim().is_empty()) {
        let _ = writeln!(out, "  {}", desc.trim());
    }
    let views = r
        .avg_views
        .map(thousands_f64)
        .unwrap_or_else(|| "N/A".to_string());
    let _ = writeln!(
        out,
        "  {} followers | {} likes | {} views | {:.1}% quality",
        thousands(r.users_count),
        thousands_f64(r.avg_likes),
        views,
        r.quality_percent()
    );
    let _ = writeln!(
        out,
        "  {}, {}, {}",
        or_dash(&r.country),
        or_dash(&r.gender),
        or_dash(&r.age)
    );
    if let Some(url) = r.url.as_deref() {
        let _ = writeln!(out, "  {url}");
    }
    out
}

pub fn render_grid(records: &[InfluencerRecord]) -> String {
    if records.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    records
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_footer(current_page: u32, total_pages: u32, can_prev: bool, can_next: bool) -> String {
    let prev = if can_prev { "< prev" } else { "      " };
    let next = if can_next { "next >" } else { "" };
    format!("{prev}  Page {current_page} of {total_pages}  {next}")
        .trim_end()
        .to_string()
}

/// Grid followed by the page footer.
pub fn render_pager(pager: &Pager) -> String {
    let mut out = render_grid(pager.records());
    out.push('\n');
    out.push_str(&render_footer(
        pager.current_page(),
        pager.total_pages(),
        pager.can_prev(),
        pager.can_next(),
    ));
    out.push('\n');
    out
}
