pub const REACH_BOTTOM_EVENT: &str = "reach-bottom";
pub const SCROLL_EVENT: &str = "scroll";


/// Distance in pixels between the sentinel and the bottom of the viewport below which more content is requested
pub const REACH_BOTTOM_THRESHOLD: i32 = 40;
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 200;
