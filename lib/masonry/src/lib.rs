#[cfg(feature = "browser")]
pub mod browser;
pub mod scroll;
pub mod types;
pub mod widget;
