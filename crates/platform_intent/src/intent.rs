//! Activation events and the pending file-intent state they populate.

use serde::{Deserialize, Serialize};

use crate::{derive_filesystem_path, IntentHostServices};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Action discriminant carried by a host activation event.
pub enum ActivationAction {
    /// The host asked the application to display an external resource.
    View,
    /// Any other activation (launch, resume without a resource, and so on).
    /// Shell transports map every non-view host action onto this variant.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One host activation event as delivered by the shell's lifecycle hooks.
pub struct ActivationEvent {
    /// Action discriminant.
    pub action: ActivationAction,
    /// Opaque resource identifier, present on file-open activations.
    pub resource_identifier: Option<String>,
}

impl ActivationEvent {
    /// View activation carrying a resource identifier.
    pub fn view(identifier: impl Into<String>) -> Self {
        Self {
            action: ActivationAction::View,
            resource_identifier: Some(identifier.into()),
        }
    }

    /// Non-view activation.
    pub fn other() -> Self {
        Self {
            action: ActivationAction::Other,
            resource_identifier: None,
        }
    }
}

/// Pending file-open hand-off state between the host lifecycle and the bridge.
///
/// Both fields are one-shot: a bridge read returns and clears a field, and
/// reading one never clears the other. A new qualifying activation overwrites
/// both, read or not. The struct is owned by whatever registers the bridge
/// handlers; it is process-local and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingFileIntent {
    resource_identifier: Option<String>,
    filesystem_path: Option<String>,
}

impl PendingFileIntent {
    /// Takes the pending resource identifier, clearing it.
    pub fn take_resource_identifier(&mut self) -> Option<String> {
        self.resource_identifier.take()
    }

    /// Takes the pending filesystem path, clearing it.
    pub fn take_filesystem_path(&mut self) -> Option<String> {
        self.filesystem_path.take()
    }

    pub(crate) fn replace(&mut self, identifier: String, path: Option<String>) {
        self.resource_identifier = Some(identifier);
        self.filesystem_path = path;
    }
}

/// Receives host activation events and populates the pending intent state.
///
/// The hosting shell calls [`FileIntentReceiver::handle_activation`] from its
/// own lifecycle hooks, on cold start and on every re-activation, with
/// whatever event triggered the entry.
pub struct FileIntentReceiver {
    services: IntentHostServices,
}

impl FileIntentReceiver {
    /// Creates a receiver over the host service bundle.
    pub fn new(services: IntentHostServices) -> Self {
        Self { services }
    }

    /// Inspects one activation event and updates the pending state.
    ///
    /// Only view activations carrying a resource identifier qualify; they
    /// store the identifier verbatim and the derivation result (present or
    /// absent) alongside it, overwriting any previous pending values. Every
    /// other event leaves existing pending values untouched.
    pub fn handle_activation(&self, state: &mut PendingFileIntent, event: &ActivationEvent) {
        if event.action != ActivationAction::View {
            return;
        }
        let Some(identifier) = event.resource_identifier.as_deref() else {
            return;
        };
        let path = derive_filesystem_path(&self.services, identifier);
        state.replace(identifier.to_string(), path);
    }
}
