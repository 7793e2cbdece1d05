use crate::domain::content::entity::ContentRecord;

pub const DEFAULT_EXCERPT_WORDS: usize = 55;
pub const DEFAULT_EXCERPT_MORE: &str = " [\u{2026}]";

/// Chooses the summary text shown for a record in listings.
///
/// An explicit excerpt wins. Otherwise the body is stripped of markup and cut
/// to `word_limit` words, with `more` appended when anything was dropped.
#[derive(Debug, Clone)]
pub struct ExcerptPolicy {
    word_limit: usize,
    more: String,
}

impl Default for ExcerptPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXCERPT_WORDS, DEFAULT_EXCERPT_MORE)
    }
}

impl ExcerptPolicy {
    pub fn new(word_limit: usize, more: impl Into<String>) -> Self {
        Self {
            word_limit: word_limit.max(1),
            more: more.into(),
        }
    }

    pub fn excerpt_for(&self, record: &ContentRecord) -> String {
        match record.explicit_excerpt() {
            Some(explicit) => explicit.to_string(),
            None => self.generate(&record.body),
        }
    }

    pub fn generate(&self, body: &str) -> String {
        let text = strip_tags(&strip_shortcodes(body));
        let mut words = text.split_whitespace();
        let kept: Vec<&str> = words.by_ref().take(self.word_limit).collect();
        let mut excerpt = kept.join(" ");
        if words.next().is_some() {
            excerpt.push_str(&self.more);
        }
        excerpt
    }
}

/// Remove `[name ...]` and `[/name]` markers. Brackets not opening with a
/// letter (`[1]`, `[ note ]`) are left alone.
fn strip_shortcodes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let inner = tail[1..].strip_prefix('/').unwrap_or(&tail[1..]);
        let is_shortcode = inner.starts_with(|c: char| c.is_ascii_alphabetic());
        match tail[1..].find([']', '[']) {
            Some(end) if is_shortcode && tail.as_bytes()[end + 1] == b']' => {
                out.push(' ');
                rest = &tail[end + 2..];
            }
            _ => {
                out.push('[');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

// Tags that separate words when removed.
const BREAKING_TAGS: [&str; 18] = [
    "p", "br", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote",
    "tr", "td", "th", "hr", "section",
];

/// Remove HTML tags. Content of `<script>` and `<style>` is dropped as well.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('>') else {
            // a lone '<' is text, not markup
            out.push_str(tail);
            return out;
        };

        let tag = tail[1..end].trim_start().to_ascii_lowercase();
        let name = tag_name(&tag);
        if BREAKING_TAGS.iter().any(|breaking| *breaking == name) {
            out.push(' ');
        }
        rest = &tail[end + 1..];

        if let Some(raw) = RAW_TEXT_TAGS.iter().find(|raw| opens(&tag, raw)) {
            let closing = format!("</{raw}");
            rest = match rest.to_ascii_lowercase().find(&closing) {
                Some(idx) => &rest[idx..],
                None => "",
            };
        }
    }

    out.push_str(rest);
    out
}

fn tag_name(tag: &str) -> &str {
    let tag = tag.trim_start_matches('/');
    let end = tag
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(tag.len());
    &tag[..end]
}

fn opens(tag: &str, name: &str) -> bool {
    tag.strip_prefix(name)
        .is_some_and(|after| after.chars().next().is_none_or(|c| c.is_whitespace() || c == '/'))
}
