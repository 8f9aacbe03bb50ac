// SPDX-License-Identifier: MPL-2.0
//! Typed text for notification titles and bodies.
//!
//! A [`Content`] tags its text as plain (shown verbatim) or markup (tags are
//! interpreted instead of displayed). Bare strings convert to plain content.

/// How the body of a [`Content`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    /// Rendered verbatim; markup characters are shown as-is.
    #[default]
    PlainText,
    /// Rendered as markup.
    Markup,
}

/// A piece of text together with the way it should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    body: String,
    kind: ContentKind,
}

impl Content {
    pub fn new(body: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            body: body.into(),
            kind,
        }
    }

    pub fn plain(body: impl Into<String>) -> Self {
        Self::new(body, ContentKind::PlainText)
    }

    pub fn markup(body: impl Into<String>) -> Self {
        Self::new(body, ContentKind::Markup)
    }

    /// Builds content from a MIME-like type name. Only `text/html` is markup.
    pub fn with_type(body: impl Into<String>, mime: &str) -> Self {
        let kind = if mime.eq_ignore_ascii_case("text/html") {
            ContentKind::Markup
        } else {
            ContentKind::PlainText
        };
        Self::new(body, kind)
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    #[must_use]
    pub fn is_markup(&self) -> bool {
        self.kind == ContentKind::Markup
    }
}

impl From<&str> for Content {
    fn from(body: &str) -> Self {
        Self::plain(body)
    }
}

impl From<String> for Content {
    fn from(body: String) -> Self {
        Self::plain(body)
    }
}

/// Inline formatting of a run of markup text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub monospace: bool,
}

/// A run of text sharing one [`MarkupStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    pub text: String,
    pub style: MarkupStyle,
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Monospace,
}

impl Format {
    fn from_tag(name: &str) -> Option<Self> {
        match name {
            "b" | "strong" => Some(Format::Bold),
            "i" | "em" => Some(Format::Italic),
            "u" | "ins" | "a" => Some(Format::Underline),
            "s" | "strike" | "del" => Some(Format::Strikethrough),
            "code" | "tt" | "kbd" | "pre" => Some(Format::Monospace),
            _ => None,
        }
    }
}

/// Collects text into spans, tracking how deep each format is nested.
#[derive(Default)]
struct SpanBuilder {
    spans: Vec<MarkupSpan>,
    text: String,
    depth: [u16; 5],
}

impl SpanBuilder {
    fn style(&self) -> MarkupStyle {
        let on = |format: Format| self.depth[format as usize] > 0;
        MarkupStyle {
            bold: on(Format::Bold),
            italic: on(Format::Italic),
            underline: on(Format::Underline),
            strikethrough: on(Format::Strikethrough),
            monospace: on(Format::Monospace),
        }
    }

    fn flush(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let style = self.style();
        let text = std::mem::take(&mut self.text);
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.spans.push(MarkupSpan { text, style }),
        }
    }

    fn open(&mut self, format: Format) {
        self.flush();
        let depth = &mut self.depth[format as usize];
        *depth = depth.saturating_add(1);
    }

    fn close(&mut self, format: Format) {
        self.flush();
        let depth = &mut self.depth[format as usize];
        *depth = depth.saturating_sub(1);
    }

    fn finish(mut self) -> Vec<MarkupSpan> {
        self.flush();
        while let Some(last) = self.spans.last_mut() {
            let trimmed = last.text.trim_end_matches('\n').len();
            last.text.truncate(trimmed);
            if !last.text.is_empty() {
                break;
            }
            self.spans.pop();
        }
        self.spans
    }
}

/// Splits markup into styled runs of displayed text.
///
/// Inline tags (`b`, `i`, `u`, `s`, `code` and their synonyms) set the style
/// of the text they enclose, other tags are dropped. `<br>` and block-level
/// closers become line breaks and the common character entities are decoded.
#[must_use]
pub fn parse_markup(markup: &str) -> Vec<MarkupSpan> {
    let mut builder = SpanBuilder::default();
    let mut rest = markup;

    while let Some(start) = rest.find(['<', '&']) {
        builder.text.push_str(&rest[..start]);
        rest = &rest[start..];

        if rest.starts_with('<') {
            let Some(end) = rest.find('>') else {
                builder.text.push_str(rest);
                return builder.finish();
            };
            let tag = rest[1..end].trim().trim_end_matches('/').trim();
            let name = tag
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_ascii_lowercase();
            let (closing, bare) = match name.strip_prefix('/') {
                Some(bare) => (true, bare),
                None => (false, name.as_str()),
            };
            match Format::from_tag(bare) {
                Some(format) if closing => builder.close(format),
                Some(format) => builder.open(format),
                None if bare == "br" || (closing && matches!(bare, "p" | "div" | "li")) => {
                    builder.text.push('\n');
                }
                None => {}
            }
            rest = &rest[end + 1..];
        } else {
            match rest.find(';').map(|end| (end, decode_entity(&rest[1..end]))) {
                Some((end, Some(ch))) => {
                    builder.text.push(ch);
                    rest = &rest[end + 1..];
                }
                _ => {
                    builder.text.push('&');
                    rest = &rest[1..];
                }
            }
        }
    }
    builder.text.push_str(rest);
    builder.finish()
}

/// Reduces markup to the text it displays, without formatting.
#[must_use]
pub fn markup_to_text(markup: &str) -> String {
    parse_markup(markup)
        .into_iter()
        .map(|span| span.text)
        .collect()
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = entity.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
