pub mod dashboard;
pub mod interactive;
pub mod pagination;

pub use dashboard::{DashboardState, LoadState, Tab};
pub use interactive::{InitialView, run_interactive_ui};
pub use pagination::{MapBrowser, Paginator};
