//! UI layer: app shell, section rendering, theme, and small widgets.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::PortfolioApp;
