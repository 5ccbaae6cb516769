//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::short_link::ShortLink;
pub use repository::{InsertOutcome, ShortLinkRepository};
pub use value_object::{
    destination::Destination, reserved::ReservedSegments, short_code::ShortCode,
};
