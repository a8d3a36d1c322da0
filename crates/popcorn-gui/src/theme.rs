//! Application theme: one embedded TOML file with dark and light variants.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use iced::Theme;

/// Embedded theme TOML source (contains both dark and light).
const THEME_TOML: &str = include_str!("../assets/theme.toml");

/// A fully loaded theme with both appearance variants.
#[derive(Debug, Clone)]
pub struct PopcornTheme {
    pub name: String,
    pub dark: ColorScheme,
    pub light: ColorScheme,
}

impl PopcornTheme {
    /// Load a theme from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let file: ThemeFile =
            toml::from_str(toml_str).map_err(|e| format!("theme parse error: {e}"))?;
        Ok(Self {
            name: file.meta.name.clone(),
            dark: ColorScheme::from_variant(&file.dark),
            light: ColorScheme::from_variant(&file.light),
        })
    }

    /// Load the embedded theme.
    pub fn embedded() -> Self {
        Self::from_toml(THEME_TOML).expect("embedded theme is valid TOML")
    }

    /// Get the color scheme for a resolved mode (Dark or Light).
    pub fn colors(&self, mode: ThemeMode) -> &ColorScheme {
        match mode {
            ThemeMode::Light => &self.light,
            // Dark is the fallback for both Dark and System.
            _ => &self.dark,
        }
    }

    /// Build the iced Theme for a given mode.
    pub fn iced_theme(&self, mode: ThemeMode) -> Theme {
        build_theme(&self.name, self.colors(mode))
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(name: &str, cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        name.to_string(),
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.success,
            warning: cs.star,
            danger: cs.error,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_theme_loads() {
        let theme = PopcornTheme::embedded();
        assert_eq!(theme.name, "Popcorn");
        // Light and dark surfaces differ
        assert_ne!(theme.dark.surface, theme.light.surface);
    }

    #[test]
    fn test_system_mode_falls_back_to_dark_palette() {
        let theme = PopcornTheme::embedded();
        assert_eq!(theme.colors(ThemeMode::System).surface, theme.dark.surface);
    }
}
