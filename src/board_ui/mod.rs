//! Board rendering: page buffers and the per-tab page builders.

pub mod colors;
pub mod page;
pub mod tabs;

pub use page::{BoardPage, Line, Span, Style, TabLabel};
pub use tabs::{
    build_page, error_page, favorites_page, home_page, loading_page, maps_page, poules_page,
};
