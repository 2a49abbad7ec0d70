pub mod constants;
pub mod errors;
pub mod rate_limit;
pub mod timer;
