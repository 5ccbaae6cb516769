//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (OS randomness, SHA-256, hex/base64)
//! - PIN hashing (Argon2id, PHC strings, zeroized clear text)
//! - Cookie building and parsing

pub mod cookie;
pub mod crypto;
pub mod pin;
