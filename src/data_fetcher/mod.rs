pub mod api;
pub mod models;
pub mod processors;

pub use api::fetch_dashboard;
pub use models::{Dashboard, Edition, Finish, MapEntry, MapView, Poule, RawRange};
