//! Markup feature extraction - structural signals from semi-structured HTML
//!
//! Each feature is produced by an independent linear scan with a bounded,
//! non-backtracking pattern; unmatched or malformed tags simply fail to
//! match and contribute 0. The extractor never parses a DOM and never
//! errors on malformed input.

use regex::Regex;

/// Structural signals extracted from one markup body.
#[derive(Debug, Clone, Default)]
pub struct MarkupFeatures {
    /// Opening-tag counts per heading level
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    /// Inner texts of well-paired headings, tags stripped
    pub h1_texts: Vec<String>,
    pub h2_texts: Vec<String>,
    pub h3_texts: Vec<String>,
    /// H2/H3 headings whose inner text contains `?`
    pub question_heading_count: usize,
    /// `<ul>` + `<ol>` opening tags
    pub list_count: usize,
    /// `<li>` opening tags
    pub list_item_count: usize,
    /// Anchor tags with a non-empty href
    pub link_count: usize,
    /// Links whose href is not a same-page fragment (`#...`)
    pub non_fragment_link_count: usize,
    /// Links whose href is an absolute `http(s)://` URL
    pub absolute_link_count: usize,
    pub image_count: usize,
    pub strong_count: usize,
    pub paragraph_count: usize,
    /// Inner text of each well-paired paragraph, tags stripped
    pub paragraph_texts: Vec<String>,
    pub has_blockquote: bool,
}

fn open_tag(name: &str) -> Regex {
    Regex::new(&format!(r"(?i)<{name}\b")).unwrap()
}

fn paired_tag(name: &str) -> Regex {
    Regex::new(&format!(r"(?is)<{name}[^>]*>(.*?)</{name}\s*>")).unwrap()
}

fn href_pattern() -> Regex {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*["']([^"']*)["']"#).unwrap()
}

fn tag_pattern() -> Regex {
    Regex::new(r"(?s)<[^>]*>").unwrap()
}

/// Strip tags from an inner-markup fragment and collapse whitespace.
fn strip_tags(fragment: &str) -> String {
    let without_tags = tag_pattern().replace_all(fragment, " ");
    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn inner_texts(markup: &str, name: &str) -> Vec<String> {
    paired_tag(name)
        .captures_iter(markup)
        .map(|c| strip_tags(&c[1]))
        .collect()
}

/// Scan markup for all structural features in independent linear passes.
pub fn extract(markup: &str) -> MarkupFeatures {
    let h1_texts = inner_texts(markup, "h1");
    let h2_texts = inner_texts(markup, "h2");
    let h3_texts = inner_texts(markup, "h3");
    let question_heading_count = h2_texts
        .iter()
        .chain(&h3_texts)
        .filter(|t| t.contains('?'))
        .count();

    let mut link_count = 0;
    let mut non_fragment_link_count = 0;
    let mut absolute_link_count = 0;
    for caps in href_pattern().captures_iter(markup) {
        let href = caps[1].trim();
        if href.is_empty() {
            continue;
        }
        link_count += 1;
        if !href.starts_with('#') {
            non_fragment_link_count += 1;
        }
        let lower = href.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            absolute_link_count += 1;
        }
    }

    MarkupFeatures {
        h1_count: open_tag("h1").find_iter(markup).count(),
        h2_count: open_tag("h2").find_iter(markup).count(),
        h3_count: open_tag("h3").find_iter(markup).count(),
        h1_texts,
        h2_texts,
        h3_texts,
        question_heading_count,
        list_count: open_tag("ul").find_iter(markup).count()
            + open_tag("ol").find_iter(markup).count(),
        list_item_count: open_tag("li").find_iter(markup).count(),
        link_count,
        non_fragment_link_count,
        absolute_link_count,
        image_count: open_tag("img").find_iter(markup).count(),
        strong_count: open_tag("strong").find_iter(markup).count(),
        paragraph_count: open_tag("p").find_iter(markup).count(),
        paragraph_texts: inner_texts(markup, "p"),
        has_blockquote: open_tag("blockquote").is_match(markup),
    }
}
