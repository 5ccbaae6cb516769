//! Application Layer

pub mod config;
pub mod generator;
pub mod resolve;
pub mod shorten;

pub use config::ShortLinkConfig;
pub use generator::{CodeGenerator, CodeSource, OsCodeSource};
pub use resolve::ResolveUseCase;
pub use shorten::ShortenUseCase;
