//! Process-unique opaque tokens.

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A unique opaque token with a display label.
///
/// Every call to [`Symbol::new`] produces a distinct identity; two
/// symbols compare equal only if one is a clone of the other. The label
/// is presentation only and carries no identity.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    label: String,
}

impl Symbol {
    /// Create a fresh symbol with the given display label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            label: label.into(),
        }
    }

    /// The process-unique identity.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.label)
    }
}

/// Serializes as the label only; the identity is process-local and
/// meaningless outside the process.
impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}
