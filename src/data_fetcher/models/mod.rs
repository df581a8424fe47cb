pub mod dashboard;
pub mod finishes;
pub mod groups;
pub mod season;
pub mod sheets;

pub use dashboard::Dashboard;
pub use finishes::{Finish, MapEntry};
pub use groups::{Favorite, Poule};
pub use season::{Edition, MapView};
pub use sheets::{BatchGetResponse, BatchRanges, RawRange, SeasonRanges, ValueRange};
