//! Markdown table of contents.
//!
//! Headings are rendered as nested `<ol data-level="N">` lists. A heading that
//! jumps more than one level deeper than its predecessor gets empty entries
//! for the levels in between, so every list sits inside an item of the list
//! one level up.
use std::collections::HashMap;
use std::fmt::Write;

/// Offset, in pixels, below the scroll position at which a heading counts
/// as reached.
const SCROLL_MARGIN: i64 = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub id: String,
    pub text: String,
}

impl Heading {
    pub fn new(level: u8, id: &str, text: &str) -> Self {
        Heading {
            level: level.max(1).min(6),
            id: id.to_owned(),
            text: text.to_owned(),
        }
    }

    /// Collect the ATX headings of a markdown document.
    ///
    /// Ids are lowercase slugs of the heading text; repeated slugs get a
    /// numeric suffix. Fenced code blocks are skipped.
    pub fn parse_markdown(source: &str) -> Vec<Heading> {
        let mut headings = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut fence: Option<&str> = None;
        for line in source.lines() {
            let trimmed = line.trim_start();
            if line.len() - trimmed.len() > 3 {
                continue;
            }
            if let Some(marker) = ["```", "~~~"].iter().find(|m| trimmed.starts_with(**m)) {
                fence = match fence {
                    Some(open) if open == *marker => None,
                    None => Some(*marker),
                    open => open,
                };
                continue;
            }
            if fence.is_some() {
                continue;
            }
            if let Some((level, text)) = atx_heading(trimmed) {
                let slug = slugify(text);
                let count = seen.entry(slug.clone()).or_insert(0);
                let id = if *count == 0 {
                    slug
                } else {
                    format!("{}-{}", slug, count)
                };
                *count += 1;
                headings.push(Heading::new(level, &id, text));
            }
        }
        headings
    }
}

fn atx_heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(|c: char| c == ' ' || c == '\t') {
        return None;
    }
    let text = rest.trim();
    // Closing sequence, e.g. `## Title ##`.
    let text = match text.trim_end_matches('#') {
        stripped if stripped.is_empty() || stripped.ends_with(' ') => stripped.trim_end(),
        _ => text,
    };
    Some((level as u8, text))
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' || c == '-' {
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() {
            slug.push('-');
        }
    }
    slug
}

fn escape(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            c => output.push(c),
        }
    }
}

/// Render `headings` as a table of contents. No headings renders nothing.
pub fn render(headings: &[Heading]) -> String {
    if headings.is_empty() {
        return String::new();
    }
    let placeholder = Heading::new(1, "", "");
    let mut entries: Vec<(u8, &Heading)> = Vec::with_capacity(headings.len());
    let mut previous = 0;
    for heading in headings {
        let level = heading.level.max(1).min(6);
        for skipped in previous + 1..level {
            entries.push((skipped, &placeholder));
        }
        entries.push((level, heading));
        previous = level;
    }

    let mut html = String::from(r#"<div class="markdown-toc">"#);
    let mut open = 0;
    for (level, heading) in entries {
        if level > open {
            let _ = write!(html, r#"<ol data-level="{}">"#, level);
            open = level;
        } else {
            html.push_str("</li>");
            while open > level {
                html.push_str("</ol></li>");
                open -= 1;
            }
        }
        html.push_str(r##"<li><a href="#"##);
        escape(&heading.id, &mut html);
        html.push_str(r#"">"#);
        escape(&heading.text, &mut html);
        html.push_str("</a>");
    }
    while open > 0 {
        html.push_str("</li></ol>");
        open -= 1;
    }
    html.push_str("</div>");
    html
}

/// The heading a reader scrolled to `top` is looking at.
///
/// `positions` pairs heading ids with their offset from the top of the
/// document, in any order. The active heading is the one just before the
/// first heading that lies at least `SCROLL_MARGIN` below `top`, or the last
/// heading when none does.
pub fn active_heading<S: AsRef<str>>(positions: &[(S, i64)], top: i64) -> Option<&str> {
    let mut sorted: Vec<&(S, i64)> = positions.iter().collect();
    sorted.sort_by_key(|&&(_, offset)| offset);
    let index = match sorted
        .iter()
        .position(|&&(_, offset)| offset >= top.saturating_add(SCROLL_MARGIN))
    {
        Some(0) => 0,
        Some(index) => index - 1,
        None => sorted.len().checked_sub(1)?,
    };
    let (id, _) = sorted[index];
    Some(id.as_ref())
}
