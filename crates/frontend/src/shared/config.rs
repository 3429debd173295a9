use contracts::FloatingTabBarConfig;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub tab_bar: FloatingTabBarConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse app config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[tab_bar]
home_route = "/"
border_radius = 24.0
bottom_margin = 16.0
horizontal_margin = 32.0

[tab_bar.spring]
damping = 20.0
stiffness = 90.0

[[tab_bar.tabs]]
identifier = "home"
route_path = "/"
icon_ref = "house.fill"
label = "Home"

[[tab_bar.tabs]]
identifier = "request"
route_path = "/request"
icon_ref = "car.fill"
label = "Request"

[[tab_bar.tabs]]
identifier = "profile"
route_path = "/profile"
icon_ref = "person.fill"
label = "Profile"
"#;

pub fn parse_config(source: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Tab bar configuration for the app.
///
/// Falls back to an empty (degenerate, non-fatal) bar if the embedded
/// document does not parse.
pub fn load_tab_bar_config() -> FloatingTabBarConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => {
            info!(
                "Using embedded tab bar configuration ({} tabs)",
                config.tab_bar.tabs.len()
            );
            config.tab_bar
        }
        Err(err) => {
            warn!("{}", err);
            FloatingTabBarConfig::default()
        }
    }
}
