use serde::{Deserialize, Serialize};

/// Tint of the translucent blur behind the tab bar.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlurTint {
    #[default]
    Light,
    Dark,
}

impl BlurTint {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlurTint::Light => "light",
            BlurTint::Dark => "dark",
        }
    }

    /// Background laid under the backdrop blur.
    pub fn backdrop_color(&self) -> &'static str {
        match self {
            BlurTint::Light => "rgba(255, 255, 255, 0.72)",
            BlurTint::Dark => "rgba(28, 28, 30, 0.72)",
        }
    }
}

/// Colors used by the tab bar, passed explicitly by the host.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct TabBarTheme {
    /// Indicator fill.
    pub primary: String,
    /// Icon and label color of inactive tabs.
    pub text: String,
    /// Icon and label color of the active tab.
    pub active_text: String,
    pub tint: BlurTint,
}

impl Default for TabBarTheme {
    fn default() -> Self {
        Self {
            primary: "#FF6B35".to_string(),
            text: "#1C1C1E".to_string(),
            active_text: "#FFFFFF".to_string(),
            tint: BlurTint::Light,
        }
    }
}

impl TabBarTheme {
    pub fn dark() -> Self {
        Self {
            text: "#F2F2F7".to_string(),
            tint: BlurTint::Dark,
            ..Self::default()
        }
    }

    /// Foreground color for a tab in the given selection state.
    pub fn foreground(&self, is_active: bool) -> &str {
        if is_active {
            &self.active_text
        } else {
            &self.text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_by_state() {
        let theme = TabBarTheme::default();
        assert_eq!(theme.foreground(true), "#FFFFFF");
        assert_eq!(theme.foreground(false), "#1C1C1E");
    }

    #[test]
    fn test_tint_serializes_lowercase() {
        let theme = TabBarTheme::dark();
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains(r#""tint":"dark""#));
        let back: TabBarTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tint, BlurTint::Dark);
    }
}
