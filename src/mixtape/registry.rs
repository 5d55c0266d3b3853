//! # Record Registry
//!
//! Resolves the collection key of an incoming record document to the
//! [`Scope`] (and with it the record type) responsible for it.
//!
//! Resolution is static: the set of record types is the closed [`Scope`]
//! enum, and a registry only narrows which of them a run accepts. Matching is
//! exact and case-sensitive, so `"Users"` does not resolve to
//! [`Scope::Users`]. An unresolved tag is not an error here; the caller
//! decides how to report it.

use crate::model::Scope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRegistry {
    scopes: Vec<Scope>,
}

impl Default for RecordRegistry {
    fn default() -> Self {
        Self::new(&Scope::ALL)
    }
}

impl RecordRegistry {
    pub fn new(scopes: &[Scope]) -> Self {
        let mut known: Vec<Scope> = Vec::with_capacity(scopes.len());
        for scope in scopes {
            if !known.contains(scope) {
                known.push(*scope);
            }
        }
        Self { scopes: known }
    }

    /// Returns the scope declaring `tag`, if this registry knows it.
    pub fn resolve(&self, tag: &str) -> Option<Scope> {
        self.scopes.iter().copied().find(|scope| scope.as_str() == tag)
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }
}
