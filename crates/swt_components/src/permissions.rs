//! Permission sources consulted by the render helper

use ahash::AHashMap;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};

/// A viewer's granted permission tokens.
pub trait PermissionSet {
    fn has_perm(&self, perm: &str) -> bool;
}

impl PermissionSet for HashSet<String> {
    fn has_perm(&self, perm: &str) -> bool {
        self.contains(perm)
    }
}

impl PermissionSet for BTreeSet<String> {
    fn has_perm(&self, perm: &str) -> bool {
        self.contains(perm)
    }
}

impl PermissionSet for Vec<String> {
    fn has_perm(&self, perm: &str) -> bool {
        self.iter().any(|p| p == perm)
    }
}

impl PermissionSet for [&str] {
    fn has_perm(&self, perm: &str) -> bool {
        self.contains(&perm)
    }
}

impl<const N: usize> PermissionSet for [&str; N] {
    fn has_perm(&self, perm: &str) -> bool {
        self.contains(&perm)
    }
}

impl<P: PermissionSet + ?Sized> PermissionSet for &P {
    fn has_perm(&self, perm: &str) -> bool {
        (**self).has_perm(perm)
    }
}

/// An expensive permission lookup, e.g. a database-backed user check.
pub trait PermissionBackend {
    fn has_perm(&self, perm: &str) -> bool;
}

impl<F: Fn(&str) -> bool> PermissionBackend for F {
    fn has_perm(&self, perm: &str) -> bool {
        self(perm)
    }
}

/// Asks the backend at most once per token and remembers the answer.
///
/// Meant to live as long as one request; the cache is not shared between
/// threads.
pub struct CachedPermissions<B> {
    backend: B,
    decisions: RefCell<AHashMap<String, bool>>,
}

impl<B: PermissionBackend> CachedPermissions<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            decisions: RefCell::new(AHashMap::new()),
        }
    }

    /// Number of distinct tokens looked up so far.
    pub fn cached(&self) -> usize {
        self.decisions.borrow().len()
    }
}

impl<B: PermissionBackend> PermissionSet for CachedPermissions<B> {
    fn has_perm(&self, perm: &str) -> bool {
        if let Some(granted) = self.decisions.borrow().get(perm) {
            return *granted;
        }
        let granted = self.backend.has_perm(perm);
        tracing::trace!(perm, granted, "permission looked up");
        self.decisions.borrow_mut().insert(perm.to_string(), granted);
        granted
    }
}
