//! Parsed view of the opaque resource identifier delivered with a view activation.

/// Scheme whose path component is already a plain filesystem path.
pub const FILE_SCHEME: &str = "file";
/// Scheme requiring indirection through the host's media index or document provider.
pub const CONTENT_SCHEME: &str = "content";
/// Distinguished authority marker for the device's primary external storage.
pub const PRIMARY_STORAGE_AUTHORITY: &str = "primary";

/// Path marker used by the document-provider convention (`/document/<doc-id>`).
const DOCUMENT_SEGMENT: &str = "document";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Structured view of a URI-like resource identifier.
///
/// Parsing is lenient: the identifier is kept verbatim and only split into
/// the components the resolver needs. Identifiers without a recognizable
/// scheme do not parse, which downstream code treats the same as an
/// unsupported scheme (derived path absent).
pub struct ResourceUri {
    raw: String,
    scheme: String,
    authority: Option<String>,
    path: String,
}

impl ResourceUri {
    /// Parses an identifier into scheme, authority, and path components.
    ///
    /// Returns `None` when no valid scheme prefix is present. Scheme matching
    /// downstream is case-insensitive, so the scheme is stored lowercased.
    /// Query and fragment suffixes are not part of the path component.
    pub fn parse(raw: &str) -> Option<Self> {
        let colon = raw.find(':')?;
        let scheme = &raw[..colon];
        if !is_valid_scheme(scheme) {
            return None;
        }

        let rest = &raw[colon + 1..];
        let (authority, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after
                    .find(['/', '?', '#'])
                    .unwrap_or(after.len());
                let authority = &after[..end];
                let authority = (!authority.is_empty()).then(|| authority.to_string());
                (authority, &after[end..])
            }
            None => (None, rest),
        };
        let path_end = rest.find(['?', '#']).unwrap_or(rest.len());

        Some(Self {
            raw: raw.to_string(),
            scheme: scheme.to_ascii_lowercase(),
            authority,
            path: rest[..path_end].to_string(),
        })
    }

    /// Returns the identifier exactly as delivered by the host.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the lowercased scheme component.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the authority component, absent when empty or missing.
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Returns the path component (no query or fragment).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Extracts the provider-internal document id when the identifier follows
    /// the document-provider convention (`/document/<doc-id>`).
    ///
    /// The id segment is percent-decoded. Identifiers with any other path
    /// shape, or an id that fails to decode, do not conform and yield `None`.
    pub fn document_id(&self) -> Option<String> {
        let mut segments = self.path.split('/').filter(|s| !s.is_empty());
        let marker = segments.next()?;
        let encoded = segments.next()?;
        if marker != DOCUMENT_SEGMENT || segments.next().is_some() {
            return None;
        }
        urlencoding::decode(encoded).ok().map(|id| id.into_owned())
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}
