//! Human-readable summary of the founder database.

use std::fmt::Write;

use super::DatabaseEntry;

/// Number of entries listed under "Recent Additions"
pub const RECENT_ADDITIONS: usize = 20;

/// Characters of description kept in the summary
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Count entries per source, most common first. Ties keep first-seen order.
pub fn count_by_source(entries: &[DatabaseEntry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for entry in entries {
        let source = if entry.source.is_empty() {
            "Unknown"
        } else {
            entry.source.as_str()
        };
        match counts.iter_mut().find(|(name, _)| name == source) {
            Some((_, count)) => *count += 1,
            None => counts.push((source.to_string(), 1)),
        }
    }

    // stable sort keeps insertion order for equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn preview(text: &str) -> String {
    text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect()
}

/// Render the Markdown summary. `last_updated` is printed verbatim.
pub fn render_markdown(entries: &[DatabaseEntry], last_updated: &str) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = write!(
        out,
        "# Founder Contact Database\n\n\
         **Last Updated:** {}\n\n\
         **Total Startups:** {}\n\n\
         ---\n\n",
        last_updated,
        entries.len()
    );

    out.push_str("## Summary by Source\n\n");
    for (source, count) in count_by_source(entries) {
        let _ = writeln!(out, "- **{}:** {} startups", source, count);
    }

    out.push_str("\n---\n\n");
    let _ = write!(out, "## Recent Additions (Top {})\n\n", RECENT_ADDITIONS);

    for (i, entry) in entries.iter().take(RECENT_ADDITIONS).enumerate() {
        let _ = write!(out, "### {}. {}\n\n", i + 1, entry.startup_name);

        if !entry.description.is_empty() {
            let _ = write!(out, "**Description:** {}...\n\n", preview(&entry.description));
        }
        let optional = [
            ("Founders", &entry.founders),
            ("Funding", &entry.funding_amount),
            ("Industry", &entry.industry),
            ("Website", &entry.website),
        ];
        for (label, value) in optional {
            if !value.is_empty() {
                let _ = write!(out, "**{}:** {}\n\n", label, value);
            }
        }

        let _ = write!(out, "**Source:** {}\n\n", entry.source);
        out.push_str("---\n\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, source: &str) -> DatabaseEntry {
        DatabaseEntry {
            startup_name: name.to_string(),
            source: source.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_count_by_source_orders_by_count_then_first_seen() {
        let entries = vec![
            entry("A", "YC"),
            entry("B", "topstartups.io"),
            entry("C", "Manual"),
            entry("D", "topstartups.io"),
            entry("E", "YC"),
            entry("F", ""),
        ];

        let counts = count_by_source(&entries);

        assert_eq!(
            counts,
            vec![
                ("YC".to_string(), 2),
                ("topstartups.io".to_string(), 2),
                ("Manual".to_string(), 1),
                ("Unknown".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_render_header_and_summary() {
        let entries = vec![entry("Acme", "YC"), entry("Beta", "YC")];
        let md = render_markdown(&entries, "2026-02-10 09:00:00");

        assert!(md.starts_with("# Founder Contact Database\n\n"));
        assert!(md.contains("**Last Updated:** 2026-02-10 09:00:00\n\n"));
        assert!(md.contains("**Total Startups:** 2\n\n"));
        assert!(md.contains("- **YC:** 2 startups\n"));
        assert!(md.contains("### 1. Acme\n\n"));
        assert!(md.contains("### 2. Beta\n\n"));
    }

    #[test]
    fn test_render_truncates_description() {
        let mut e = entry("Acme", "YC");
        e.description = "x".repeat(250);
        let md = render_markdown(&[e], "now");

        let expected = format!("**Description:** {}...\n\n", "x".repeat(200));
        assert!(md.contains(&expected));
        assert!(!md.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_render_skips_empty_optional_fields() {
        let mut e = entry("Acme", "YC");
        e.funding_amount = "$2M seed".to_string();
        let md = render_markdown(&[e], "now");

        assert!(md.contains("**Funding:** $2M seed\n\n"));
        assert!(!md.contains("**Founders:**"));
        assert!(!md.contains("**Description:**"));
        assert!(md.contains("**Source:** YC\n\n---\n\n"));
    }

    #[test]
    fn test_render_lists_only_first_twenty() {
        let entries: Vec<_> = (1..=25).map(|i| entry(&format!("S{}", i), "YC")).collect();
        let md = render_markdown(&entries, "now");

        assert!(md.contains("### 20. S20\n\n"));
        assert!(!md.contains("### 21."));
        assert!(md.contains("**Total Startups:** 25"));
    }
}
