use std::fmt::{ Display, Formatter };
use std::str::FromStr;

/// Visual mode of the page, persisted as `"light"` or `"dark"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parses a stored value, `None` for anything other than the two names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::parse(s).ok_or_else(|| format!("unknown theme: {}", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl From<Theme> for ThemeState {
    fn from(theme: Theme) -> Self {
        Self { is_dark: theme == Theme::Dark }
    }
}

impl ThemeState {
    pub fn theme(self) -> Theme {
        if self.is_dark { Theme::Dark } else { Theme::Light }
    }

    /// Glyph shown on the toggle: the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        if self.is_dark { "🌞" } else { "🌙" }
    }
}
