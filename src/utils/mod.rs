pub mod limit_group;
pub mod logger;

pub use limit_group::{map_bounded, LimitGroup};
pub use logger::init_logger;
