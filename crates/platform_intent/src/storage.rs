//! Storage-environment host-service contracts and adapters.

/// Host service exposing well-known storage locations.
pub trait StorageEnv {
    /// Returns the device's external-storage root path, when the host has one.
    ///
    /// Absence disables document-provider path synthesis; the resolver then
    /// leaves the derived path unset rather than guessing a root.
    fn external_storage_root(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op storage environment for hosts without a well-known storage root.
pub struct NoopStorageEnv;

impl StorageEnv for NoopStorageEnv {
    fn external_storage_root(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
/// Storage environment with a fixed external-storage root, for tests and
/// hosts that resolve the root once at startup.
pub struct FixedStorageEnv {
    root: String,
}

impl FixedStorageEnv {
    /// Creates a storage environment rooted at `root`.
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }
}

impl StorageEnv for FixedStorageEnv {
    fn external_storage_root(&self) -> Option<String> {
        Some(self.root.clone())
    }
}
