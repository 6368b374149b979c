mod diary;
mod message;
mod personality;
mod user;

pub use diary::*;
pub use message::*;
pub use personality::*;
pub use user::*;
