//! Typed host-domain contracts for the viewer shell's file-open intent flow.
//!
//! This crate is the API-first boundary between the hosting shell and the
//! application logic layer for "open this file" activations. It captures the
//! most recent view activation, derives a plain filesystem path from the
//! opaque resource identifier where the host allows it, and answers the two
//! pull-style bridge queries the application layer issues on startup. Host
//! collaborators (media index, storage environment) stay behind service
//! traits so shell transports can adapt them without coupling this crate to
//! any one host runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod host;
pub mod intent;
pub mod media_index;
pub mod resolve;
pub mod storage;
pub mod uri;

pub use bridge::{
    handle_bridge_request, BridgeResponse, FILE_INTENT_CHANNEL,
    REQUEST_INITIAL_FILESYSTEM_PATH, REQUEST_INITIAL_RESOURCE_IDENTIFIER,
};
pub use host::IntentHostServices;
pub use intent::{ActivationAction, ActivationEvent, FileIntentReceiver, PendingFileIntent};
pub use media_index::{
    MediaIndexError, MediaIndexRow, MediaIndexService, MemoryMediaIndex, NoopMediaIndex,
};
pub use resolve::derive_filesystem_path;
pub use storage::{FixedStorageEnv, NoopStorageEnv, StorageEnv};
pub use uri::{ResourceUri, CONTENT_SCHEME, FILE_SCHEME, PRIMARY_STORAGE_AUTHORITY};
