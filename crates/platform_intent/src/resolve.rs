//! Derivation of a plain filesystem path from an opaque resource identifier.

use crate::{
    IntentHostServices, ResourceUri, CONTENT_SCHEME, FILE_SCHEME, PRIMARY_STORAGE_AUTHORITY,
};

/// Derives a plain filesystem path from `identifier`, or `None` when no
/// strategy applies.
///
/// `file`-scheme identifiers carry the path directly. Managed-content
/// identifiers go through the media index first and the document-provider
/// convention second. Every host-service failure degrades to "path absent";
/// this function has no error path, because absence is the signal the
/// application layer acts on.
pub fn derive_filesystem_path(services: &IntentHostServices, identifier: &str) -> Option<String> {
    let uri = ResourceUri::parse(identifier)?;
    match uri.scheme() {
        FILE_SCHEME => Some(uri.path().to_string()),
        CONTENT_SCHEME => resolve_managed_content(services, &uri),
        _ => None,
    }
}

fn resolve_managed_content(services: &IntentHostServices, uri: &ResourceUri) -> Option<String> {
    match services.media_index.query_row(uri.raw()) {
        Ok(Some(row)) => {
            if let Some(path) = row.data_path {
                tracing::debug!(
                    identifier = uri.raw(),
                    display_name = row.display_name.as_deref(),
                    "resolved managed-content identifier via media index"
                );
                return Some(path);
            }
        }
        Ok(None) => {}
        Err(err) => {
            tracing::warn!(
                identifier = uri.raw(),
                error = %err,
                "media index query failed; falling through to document provider"
            );
        }
    }

    let doc_id = uri.document_id()?;
    if uri.authority() != Some(PRIMARY_STORAGE_AUTHORITY) {
        return None;
    }
    let root = services.storage.external_storage_root()?;
    Some(format!("{root}/{doc_id}"))
}
