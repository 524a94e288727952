//! Narration script and publishing metadata assembly.

use chrono::Local;

use crate::{text, types::NewsItem};

const INTRO: &str = "Welcome to your daily news briefing. Here are today's top updates.";
const OUTRO: &str = "That's all for this briefing. Stay informed and see you next time.";

/// Assemble the full narration script: intro, one "Update N" sentence pair
/// per item, outro, all single-space joined.
pub fn build_script(items: &[NewsItem]) -> String {
    let mut parts = Vec::with_capacity(items.len() + 2);
    parts.push(INTRO.to_string());
    for (i, item) in items.iter().enumerate() {
        parts.push(format!(
            "Update {}: {}. {}.",
            i + 1,
            text::sanitize(&item.title),
            text::sanitize(&item.content)
        ));
    }
    parts.push(OUTRO.to_string());
    parts.join(" ")
}

/// Title used on the slide deck and for publishing.
pub fn video_title(category: &str) -> String {
    format!(
        "Daily News Briefing - {} - {}",
        capitalize(category),
        Local::now().format("%B %-d, %Y")
    )
}

/// Description for the publishing platform: one bullet per item with its
/// read-more link when available.
pub fn video_description(items: &[NewsItem]) -> String {
    let mut lines = vec![
        "Your automated daily news briefing.".to_string(),
        String::new(),
    ];
    for (i, item) in items.iter().enumerate() {
        match &item.read_more_url {
            Some(url) => lines.push(format!("{}. {} ({})", i + 1, item.title, url)),
            None => lines.push(format!("{}. {}", i + 1, item.title)),
        }
    }
    lines.join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, content: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            content: content.to_string(),
            author: None,
            read_more_url: None,
            date: None,
        }
    }

    #[test]
    fn script_numbers_every_item_in_order() {
        let items = vec![item("First", "Alpha"), item("Second", "Beta")];
        let script = build_script(&items);
        assert!(script.starts_with(INTRO));
        assert!(script.ends_with(OUTRO));
        assert!(script.contains("Update 1: First. Alpha."));
        assert!(script.contains("Update 2: Second. Beta."));
        assert!(
            script.find("Update 1").unwrap() < script.find("Update 2").unwrap()
        );
    }

    #[test]
    fn script_sanitizes_item_text() {
        let items = vec![item("A\u{2019}s  title", "body\ntext")];
        let script = build_script(&items);
        assert!(script.contains("Update 1: A's title. body text."));
    }

    #[test]
    fn script_joins_with_single_spaces() {
        let items = vec![item("T", "C")];
        let script = build_script(&items);
        assert!(!script.contains("  "));
    }

    #[test]
    fn description_links_when_url_present() {
        let mut with_url = item("Linked", "c");
        with_url.read_more_url = Some("https://example.com/x".to_string());
        let desc = video_description(&[with_url, item("Plain", "c")]);
        assert!(desc.contains("1. Linked (https://example.com/x)"));
        assert!(desc.contains("2. Plain"));
        assert!(!desc.contains("2. Plain ("));
    }

    #[test]
    fn title_carries_the_category() {
        assert!(video_title("national").starts_with("Daily News Briefing - National - "));
    }
}
