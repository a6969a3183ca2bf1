pub mod database;
pub mod setting;
pub mod util;

pub const CLI_NAME: &str = "tuna";
pub const VERSION: &str = "0.1.0";

// logging constants
pub const TUNA_LOGLEVEL: &str = "TUNA_LOGLEVEL";
