pub mod destination;
pub mod reserved;
pub mod short_code;
