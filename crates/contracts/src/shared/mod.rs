pub mod tab_bar;
pub mod theme;
