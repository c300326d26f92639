use std::collections::HashMap;

use tracing::debug;

use crate::error::PromptError;

/// Caller-supplied placeholder values, keyed by placeholder name.
pub type Values = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Placeholder(&'static str),
}

/// Static prompt text with `{name}` placeholders.
///
/// `{{` and `}}` stand for literal braces. A `{` that does not open a
/// well-formed placeholder is kept as text, so JSON-looking examples in
/// prompt prose survive untouched.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    name: &'static str,
    source: &'static str,
    segments: Vec<Segment>,
    placeholders: Vec<&'static str>,
}

impl PromptTemplate {
    pub fn new(name: &'static str, source: &'static str) -> Self {
        let segments = parse(source);
        let mut placeholders: Vec<&'static str> = Vec::new();
        for seg in &segments {
            if let Segment::Placeholder(p) = seg {
                if !placeholders.contains(p) {
                    placeholders.push(p);
                }
            }
        }
        Self {
            name,
            source,
            segments,
            placeholders,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw template text, placeholders included.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> &[&'static str] {
        &self.placeholders
    }

    /// Placeholders with no entry in `values`.
    pub fn missing(&self, values: &Values) -> Vec<&'static str> {
        self.placeholders
            .iter()
            .copied()
            .filter(|p| !values.contains_key(*p))
            .collect()
    }

    /// Substitute every placeholder. Values are inserted verbatim and never
    /// re-scanned; keys the template does not use are ignored.
    pub fn render(&self, values: &Values) -> Result<String, PromptError> {
        if let Some(name) = self.missing(values).first() {
            return Err(PromptError::MissingPlaceholder {
                template: self.name.to_string(),
                name: name.to_string(),
            });
        }
        Ok(self.render_with(|name| values.get(name).map(String::as_str).unwrap_or_default()))
    }

    /// Like [`render`](Self::render), but fills missing placeholders with `default`.
    pub fn render_or_default(&self, values: &Values, default: &str) -> String {
        let missing = self.missing(values);
        if !missing.is_empty() {
            debug!(
                template = self.name,
                ?missing,
                default,
                "filling missing placeholders with default"
            );
        }
        self.render_with(|name| values.get(name).map(String::as_str).unwrap_or(default))
    }

    fn render_with<'v>(&self, lookup: impl Fn(&str) -> &'v str) -> String {
        let mut out = String::with_capacity(self.source.len() + 256);
        for seg in &self.segments {
            match seg {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => out.push_str(lookup(name)),
            }
        }
        out
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Split `source` into literal runs and placeholder references.
fn parse(source: &'static str) -> Vec<Segment> {
    let bytes = source.as_bytes();
    let mut segments = Vec::new();
    let mut lit_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                // keep the first brace, drop the second
                segments.push(Segment::Literal(&source[lit_start..=i]));
                i += 2;
                lit_start = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                segments.push(Segment::Literal(&source[lit_start..=i]));
                i += 2;
                lit_start = i;
            }
            b'{' => {
                let name_start = i + 1;
                let mut j = name_start;
                if j < bytes.len() && is_ident_start(bytes[j]) {
                    j += 1;
                    while j < bytes.len() && is_ident_continue(bytes[j]) {
                        j += 1;
                    }
                    if bytes.get(j) == Some(&b'}') {
                        segments.push(Segment::Literal(&source[lit_start..i]));
                        segments.push(Segment::Placeholder(&source[name_start..j]));
                        i = j + 1;
                        lit_start = i;
                        continue;
                    }
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    segments.push(Segment::Literal(&source[lit_start..]));
    segments.retain(|s| !matches!(s, Segment::Literal("")));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> Values {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn placeholders_in_first_appearance_order() {
        let t = PromptTemplate::new("t", "{b} then {a} then {b} again");
        assert_eq!(t.placeholders(), &["b", "a"]);
    }

    #[test]
    fn renders_all_values() {
        let t = PromptTemplate::new("t", "Hello {name}, you feel {mood}.");
        let out = t
            .render(&values(&[("name", "Asha"), ("mood", "calm")]))
            .unwrap();
        assert_eq!(out, "Hello Asha, you feel calm.");
    }

    #[test]
    fn missing_value_is_an_error() {
        let t = PromptTemplate::new("greeting", "{a} {b} {c}");
        let err = t.render(&values(&[("a", "1")])).unwrap_err();
        match err {
            PromptError::MissingPlaceholder { template, name } => {
                assert_eq!(template, "greeting");
                assert_eq!(name, "b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_string_counts_as_supplied() {
        let t = PromptTemplate::new("t", "[{history}]");
        assert_eq!(t.render(&values(&[("history", "")])).unwrap(), "[]");
    }

    #[test]
    fn default_fills_gaps() {
        let t = PromptTemplate::new("t", "Income: {income}, Mood: {mood}");
        let out = t.render_or_default(&values(&[("mood", "happy")]), "unknown");
        assert_eq!(out, "Income: unknown, Mood: happy");
    }

    #[test]
    fn values_are_not_reexpanded() {
        let t = PromptTemplate::new("t", "{a}|{b}");
        let out = t.render(&values(&[("a", "{b}"), ("b", "{}")])).unwrap();
        assert_eq!(out, "{b}|{}");
    }

    #[test]
    fn extra_values_ignored() {
        let t = PromptTemplate::new("t", "{a}");
        let out = t.render(&values(&[("a", "x"), ("zzz", "y")])).unwrap();
        assert_eq!(out, "x");
    }

    #[test]
    fn escaped_braces() {
        let t = PromptTemplate::new("t", "{{literal}} and {x} and }}");
        assert_eq!(t.placeholders(), &["x"]);
        assert_eq!(
            t.render(&values(&[("x", "v")])).unwrap(),
            "{literal} and v and }"
        );
    }

    #[test]
    fn malformed_braces_stay_literal() {
        let src = "json {} or { spaced } or {1abc} or {open";
        let t = PromptTemplate::new("t", src);
        assert!(t.placeholders().is_empty());
        assert_eq!(t.render(&Values::new()).unwrap(), src);
    }

    #[test]
    fn no_placeholders_renders_source() {
        let t = PromptTemplate::new("t", "plain text — with unicode ✓");
        assert_eq!(t.render(&Values::new()).unwrap(), t.source());
    }

    #[test]
    fn rendering_is_idempotent() {
        let t = PromptTemplate::new("t", "{a} and {b}");
        let v = values(&[("a", "1"), ("b", "2")]);
        assert_eq!(t.render(&v).unwrap(), t.render(&v).unwrap());
    }
}
