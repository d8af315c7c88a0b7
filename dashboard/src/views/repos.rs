//! Repository list view

use chrono::DateTime;

use crate::models::repository::RepositorySummary;
use crate::views::screen::{Line, Screen, Span, Tone};

/// Case-insensitive substring filter over name or description.
///
/// An absent description simply never matches; it does not exclude the
/// repository from matching on its name. Order is preserved and the source
/// slice is untouched, so the view can recompute on every keystroke.
pub fn filter_repositories<'a>(
    items: &'a [RepositorySummary],
    query: &str,
) -> Vec<&'a RepositorySummary> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|repo| {
            repo.name.to_lowercase().contains(&needle)
                || repo
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Render the repository listing
pub fn render_repositories(items: &[&RepositorySummary]) -> Screen {
    let mut screen = Screen::new();

    if items.is_empty() {
        screen.push_toned("No repositories found", Tone::Muted);
        return screen;
    }

    for (index, repo) in items.iter().enumerate() {
        let title = match &repo.full_name {
            Some(full_name) => format!("[{}] {}", index + 1, full_name),
            None => format!("[{}] {}", index + 1, repo.name),
        };
        screen.push_toned(title, Tone::Heading);

        screen.push_plain(format!(
            "    {}",
            repo.description.as_deref().unwrap_or("No description")
        ));

        let mut meta = vec![Span::new("    ", Tone::Plain)];
        if let Some(language) = &repo.language {
            meta.push(Span::new(language.clone(), Tone::Warning));
            meta.push(Span::plain("  "));
        }
        meta.push(Span::new(
            format!("Updated: {}", format_updated(&repo.updated_at)),
            Tone::Muted,
        ));
        screen.push(Line::new(meta));
    }

    screen
}

/// Friendly date for an RFC 3339 timestamp, raw value when it does not parse
fn format_updated(updated_at: &str) -> String {
    match DateTime::parse_from_rfc3339(updated_at) {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => updated_at.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: Option<&str>) -> RepositorySummary {
        RepositorySummary {
            name: name.to_string(),
            full_name: None,
            description: description.map(str::to_string),
            language: None,
            updated_at: "2026-01-15T10:00:00Z".to_string(),
            clone_url: format!("https://git.example.com/{name}.git"),
        }
    }

    #[test]
    fn test_filter_matches_description() {
        let items = vec![repo("alpha", Some("deploy tool")), repo("beta", None)];
        let hits = filter_repositories(&items, "tool");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "alpha");
    }

    #[test]
    fn test_format_updated_falls_back_to_raw() {
        assert_eq!(format_updated("2026-01-15T10:00:00Z"), "2026-01-15");
        assert_eq!(format_updated("yesterday"), "yesterday");
    }
}
