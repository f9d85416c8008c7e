use crate::core::constants::COLOR_VARIABLE_PREFIX;

/// Closed set of color roles a branding record may define. Record keys that
/// do not parse into one of these never reach the global style scope.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Surface,
    Background,
    Border,
    Text,
    TextMuted,
    Danger,
    Warning,
    Success,
    Info,
}

pub const ALL_ROLES: [ColorRole; 12] = [
    ColorRole::Primary,
    ColorRole::Secondary,
    ColorRole::Accent,
    ColorRole::Surface,
    ColorRole::Background,
    ColorRole::Border,
    ColorRole::Text,
    ColorRole::TextMuted,
    ColorRole::Danger,
    ColorRole::Warning,
    ColorRole::Success,
    ColorRole::Info,
];

impl ColorRole {
    pub fn parse(key: &str) -> Option<ColorRole> {
        match key {
            "primary" => Some(ColorRole::Primary),
            "secondary" => Some(ColorRole::Secondary),
            "accent" => Some(ColorRole::Accent),
            "surface" => Some(ColorRole::Surface),
            "background" => Some(ColorRole::Background),
            "border" => Some(ColorRole::Border),
            "text" => Some(ColorRole::Text),
            "text-muted" => Some(ColorRole::TextMuted),
            "danger" => Some(ColorRole::Danger),
            "warning" => Some(ColorRole::Warning),
            "success" => Some(ColorRole::Success),
            "info" => Some(ColorRole::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Surface => "surface",
            ColorRole::Background => "background",
            ColorRole::Border => "border",
            ColorRole::Text => "text",
            ColorRole::TextMuted => "text-muted",
            ColorRole::Danger => "danger",
            ColorRole::Warning => "warning",
            ColorRole::Success => "success",
            ColorRole::Info => "info",
        }
    }

    /// Style variable name this role resolves to, e.g. "primary" -> "--color-primary".
    pub fn variable_name(&self) -> String {
        format!("{}{}", COLOR_VARIABLE_PREFIX, self.as_str())
    }
}
