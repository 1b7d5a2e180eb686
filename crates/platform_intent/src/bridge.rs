//! Pull-style bridge between the pending intent state and the application layer.

use serde::{Deserialize, Serialize};

use crate::PendingFileIntent;

/// Fixed request/response channel name the shell registers for this shim.
pub const FILE_INTENT_CHANNEL: &str = "com.pdfviewer/file_intent";
/// Request name for the pending resource identifier.
pub const REQUEST_INITIAL_RESOURCE_IDENTIFIER: &str = "getInitialResourceIdentifier";
/// Request name for the pending filesystem path.
pub const REQUEST_INITIAL_FILESYSTEM_PATH: &str = "getInitialFilesystemPath";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
/// Response contract for one bridge request.
///
/// "No value" and "not implemented" are distinct variants so the application
/// layer can tell "nothing pending" apart from "unsupported query".
pub enum BridgeResponse {
    /// The queried field was pending; it is now cleared.
    Value {
        /// The value that was pending.
        value: String,
    },
    /// The queried field had nothing pending.
    NoValue,
    /// The request name is not part of this channel's contract.
    NotImplemented {
        /// The unsupported request name, echoed for diagnostics.
        request: String,
    },
}

/// Handles one bridge request against the pending intent state.
///
/// Synchronous and idempotent per call: a recognized request takes and clears
/// exactly the one field it names (leaving the other untouched), and repeat
/// reads answer [`BridgeResponse::NoValue`] until a new qualifying activation
/// repopulates the state.
pub fn handle_bridge_request(state: &mut PendingFileIntent, request: &str) -> BridgeResponse {
    let taken = match request {
        REQUEST_INITIAL_RESOURCE_IDENTIFIER => state.take_resource_identifier(),
        REQUEST_INITIAL_FILESYSTEM_PATH => state.take_filesystem_path(),
        _ => {
            return BridgeResponse::NotImplemented {
                request: request.to_string(),
            }
        }
    };
    match taken {
        Some(value) => BridgeResponse::Value { value },
        None => BridgeResponse::NoValue,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{ActivationEvent, FileIntentReceiver, IntentHostServices};

    use super::*;

    fn pending_state(identifier: &str) -> PendingFileIntent {
        let receiver = FileIntentReceiver::new(IntentHostServices::noop());
        let mut state = PendingFileIntent::default();
        receiver.handle_activation(&mut state, &ActivationEvent::view(identifier));
        state
    }

    #[test]
    fn recognized_requests_deliver_once_then_report_no_value() {
        let mut state = pending_state("file:///sdcard/a.pdf");

        assert_eq!(
            handle_bridge_request(&mut state, REQUEST_INITIAL_RESOURCE_IDENTIFIER),
            BridgeResponse::Value {
                value: "file:///sdcard/a.pdf".to_string()
            }
        );
        assert_eq!(
            handle_bridge_request(&mut state, REQUEST_INITIAL_RESOURCE_IDENTIFIER),
            BridgeResponse::NoValue
        );
    }

    #[test]
    fn reading_one_field_leaves_the_other_pending() {
        let mut state = pending_state("file:///sdcard/a.pdf");

        handle_bridge_request(&mut state, REQUEST_INITIAL_RESOURCE_IDENTIFIER);
        assert_eq!(
            handle_bridge_request(&mut state, REQUEST_INITIAL_FILESYSTEM_PATH),
            BridgeResponse::Value {
                value: "/sdcard/a.pdf".to_string()
            }
        );
    }

    #[test]
    fn unknown_requests_are_not_implemented_even_with_values_pending() {
        let mut state = pending_state("file:///sdcard/a.pdf");

        assert_eq!(
            handle_bridge_request(&mut state, "getInitialDisplayName"),
            BridgeResponse::NotImplemented {
                request: "getInitialDisplayName".to_string()
            }
        );
        // The unsupported request consumed nothing.
        assert_eq!(
            handle_bridge_request(&mut state, REQUEST_INITIAL_RESOURCE_IDENTIFIER),
            BridgeResponse::Value {
                value: "file:///sdcard/a.pdf".to_string()
            }
        );
    }

    #[test]
    fn response_wire_shape_is_kebab_case_tagged() {
        let value = serde_json::to_value(BridgeResponse::Value {
            value: "/a.pdf".to_string(),
        })
        .expect("serialize value");
        assert_eq!(value, json!({"kind": "value", "value": "/a.pdf"}));

        let no_value = serde_json::to_value(BridgeResponse::NoValue).expect("serialize no-value");
        assert_eq!(no_value, json!({"kind": "no-value"}));

        let not_implemented = serde_json::to_value(BridgeResponse::NotImplemented {
            request: "getThing".to_string(),
        })
        .expect("serialize not-implemented");
        assert_eq!(
            not_implemented,
            json!({"kind": "not-implemented", "request": "getThing"})
        );
    }
}
