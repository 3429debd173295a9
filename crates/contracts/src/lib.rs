//! Data types shared between the floating tab bar and the host application.

pub mod shared;

pub use shared::tab_bar::{FloatingTabBarConfig, SpringConfig, TabBarConfigError, TabDescriptor};
pub use shared::theme::{BlurTint, TabBarTheme};
