pub mod diary;
pub(crate) mod health;
pub mod messages;
pub mod users;

pub use health::health_check;
