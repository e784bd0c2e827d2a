use crate::parse::Prompt;

/// Named colors understood in prompts. Order matters: the first name found in
/// the prompt wins, scanning this list top to bottom.
pub const PALETTE: &[(&str, &str)] = &[
    ("red", "#EF4444"),
    ("blue", "#3B82F6"),
    ("green", "#10B981"),
    ("yellow", "#F59E0B"),
    ("purple", "#8B5CF6"),
    ("pink", "#EC4899"),
    ("orange", "#F97316"),
    ("gray", "#6B7280"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
];

pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Hex value for the first palette color named in the prompt, else blue.
pub fn resolve_color(prompt: &Prompt<'_>) -> &'static str {
    named_color(prompt)
        .map(|(_, hex)| hex)
        .unwrap_or(DEFAULT_COLOR)
}

/// Palette entry named in the prompt, if any.
pub fn named_color(prompt: &Prompt<'_>) -> Option<(&'static str, &'static str)> {
    PALETTE
        .iter()
        .find(|(name, _)| prompt.mentions(name))
        .copied()
}

/// Palette name for a hex value, for describing generated elements.
pub fn color_name(hex: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(_, value)| value.eq_ignore_ascii_case(hex))
        .map(|(name, _)| *name)
}
