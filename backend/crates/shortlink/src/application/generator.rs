//! Short Code Generator

use std::fmt;
use std::sync::Arc;

use crate::domain::value_object::reserved::ReservedSegments;
use crate::domain::value_object::short_code::{CODE_BYTES, ShortCode};

/// Where code bytes come from. Production uses the OS RNG; tests inject a
/// fixed sequence to force collisions.
pub trait CodeSource: Send + Sync {
    fn next_bytes(&self) -> [u8; CODE_BYTES];
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsCodeSource;

impl CodeSource for OsCodeSource {
    fn next_bytes(&self) -> [u8; CODE_BYTES] {
        let mut bytes = [0u8; CODE_BYTES];
        bytes.copy_from_slice(&platform::crypto::random_bytes(CODE_BYTES));
        bytes
    }
}

#[derive(Clone)]
pub struct CodeGenerator {
    source: Arc<dyn CodeSource>,
    reserved: Arc<ReservedSegments>,
}

impl CodeGenerator {
    pub fn new(source: Arc<dyn CodeSource>, reserved: ReservedSegments) -> Self {
        Self {
            source,
            reserved: Arc::new(reserved),
        }
    }

    pub fn with_os_rng(reserved: ReservedSegments) -> Self {
        Self::new(Arc::new(OsCodeSource), reserved)
    }

    /// One draw. `None` when the drawn code is a reserved segment.
    pub fn candidate(&self) -> Option<ShortCode> {
        let code = ShortCode::from_bytes(self.source.next_bytes());
        (!self.reserved.contains(code.as_str())).then_some(code)
    }

    pub fn reserved(&self) -> &ReservedSegments {
        &self.reserved
    }
}

impl fmt::Debug for CodeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeGenerator")
            .field("reserved", &self.reserved)
            .finish_non_exhaustive()
    }
}
