/// A prompt prepared for keyword matching. Matching runs on the lowercased
/// text; quoted content is taken from the original so its case survives.
#[derive(Debug, Clone)]
pub struct Prompt<'a> {
    original: &'a str,
    lowered: String,
}

impl<'a> Prompt<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            lowered: original.to_lowercase(),
        }
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Substring match against the lowercased prompt. Keywords must be lowercase.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.lowered.contains(keyword)
    }

    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.mentions(k))
    }

    /// First non-empty run of text enclosed in matching double or single
    /// quotes, taken from the original-case prompt.
    pub fn quoted_text(&self) -> Option<&'a str> {
        let text = self.original;
        for (start, open) in text.char_indices() {
            if open != '"' && open != '\'' {
                continue;
            }
            let body = start + open.len_utf8();
            if let Some(len) = text[body..].find(open) {
                if len > 0 {
                    return Some(&text[body..body + len]);
                }
            }
        }
        None
    }
}

/// Which kind of element a prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detected {
    Rectangle,
    Circle,
    Line,
    Text,
    /// Nothing matched; a plain rectangle is produced
    Fallback,
}

/// Type rules in priority order. The first rule with any keyword present
/// decides the element type, wherever the keyword sits in the prompt.
pub const TYPE_RULES: &[(Detected, &[&str])] = &[
    (Detected::Rectangle, &["rectangle", "box", "square"]),
    (Detected::Circle, &["circle", "round"]),
    (Detected::Line, &["line"]),
    (Detected::Text, &["text", "label", "title"]),
];

pub fn detect(prompt: &Prompt<'_>) -> Detected {
    TYPE_RULES
        .iter()
        .find(|(_, keywords)| prompt.mentions_any(keywords))
        .map(|(detected, _)| *detected)
        .unwrap_or(Detected::Fallback)
}
