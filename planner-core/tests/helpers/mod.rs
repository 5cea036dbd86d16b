
mod models;
pub use self::models::*;

pub use self::utils::*;
