//! Host service bundle injected into the file-intent shim.

use std::rc::Rc;

use crate::{
    FixedStorageEnv, MediaIndexService, MemoryMediaIndex, NoopMediaIndex, NoopStorageEnv,
    StorageEnv,
};

/// Host-selected service bundle for intent resolution.
///
/// Shell transports assemble this bundle before it crosses into the shim, so
/// the receiver and resolver stay decoupled from host adapter details. All
/// services run on the single UI-facing execution context; handles are `Rc`
/// by contract, never shared across threads.
#[derive(Clone)]
pub struct IntentHostServices {
    /// Media-index lookup service.
    pub media_index: Rc<dyn MediaIndexService>,
    /// Well-known storage location service.
    pub storage: Rc<dyn StorageEnv>,
}

impl IntentHostServices {
    /// Bundle with no host capabilities; every managed-content derivation
    /// falls through to "path absent".
    pub fn noop() -> Self {
        Self {
            media_index: Rc::new(NoopMediaIndex),
            storage: Rc::new(NoopStorageEnv),
        }
    }

    /// In-memory bundle for tests and virtual hosts.
    pub fn memory(index: MemoryMediaIndex, storage_root: impl Into<String>) -> Self {
        Self {
            media_index: Rc::new(index),
            storage: Rc::new(FixedStorageEnv::new(storage_root)),
        }
    }
}
