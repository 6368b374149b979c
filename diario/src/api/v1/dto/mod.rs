//! v1 API Data Transfer Objects.
//!
//! These types define the wire format for the v1 REST API. They are separate
//! from the internal domain models in `src/models/`.

pub mod diary;
pub mod messages;
pub mod users;

pub use diary::*;
pub use messages::*;
pub use users::*;
