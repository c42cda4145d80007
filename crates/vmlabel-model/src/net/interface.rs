use serde::{Deserialize, Serialize};

use crate::{AddressRecord, ModelError, ModelResult};

/// One guest network interface as reported by the guest agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    /// Interface name inside the guest (e.g. `eth0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// MAC address, when reported.
    #[serde(
        rename = "hardware-address",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hardware_address: Option<String>,

    /// Addresses bound to this interface, in reported order.
    #[serde(rename = "ip-addresses", default)]
    pub addresses: Vec<AddressRecord>,
}

impl Interface {
    /// Create an unnamed interface holding the given addresses.
    pub fn with_addresses(addresses: Vec<AddressRecord>) -> Self {
        Self {
            addresses,
            ..Default::default()
        }
    }
}

/// Decoded `network-get-interfaces` query result.
///
/// Only traversed by the core, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceQueryResult {
    pub result: Vec<Interface>,
}

/// Either the API envelope (`data`) or the bare agent reply (`result`).
#[derive(Deserialize)]
struct Payload {
    data: Option<InterfaceQueryResult>,
    result: Option<Vec<Interface>>,
}

impl InterfaceQueryResult {
    pub fn new(result: Vec<Interface>) -> Self {
        Self { result }
    }

    /// Decode a query result from JSON.
    ///
    /// Accepts both the bare agent reply `{"result": [...]}` and the API envelope
    /// `{"data": {"result": [...]}}`.
    pub fn from_json(s: &str) -> ModelResult<Self> {
        let payload: Payload =
            serde_json::from_str(s).map_err(|e| ModelError::Decode(e.to_string()))?;
        match payload {
            Payload { data: Some(data), .. } => Ok(data),
            Payload {
                result: Some(result),
                ..
            } => Ok(Self { result }),
            _ => Err(ModelError::Decode(
                "missing field `result` (or `data` envelope)".to_string(),
            )),
        }
    }

    /// Number of interfaces.
    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interface> {
        self.result.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AddressFamily;

    const AGENT_REPLY: &str = r#"{
        "result": [
            {
                "name": "lo",
                "hardware-address": "00:00:00:00:00:00",
                "ip-addresses": [
                    {"ip-address": "127.0.0.1", "ip-address-type": "ipv4", "prefix": 8},
                    {"ip-address": "::1", "ip-address-type": "ipv6", "prefix": 128}
                ],
                "statistics": {"rx-bytes": 100, "tx-bytes": 100}
            },
            {
                "name": "eth0",
                "hardware-address": "bc:24:11:aa:bb:cc",
                "ip-addresses": [
                    {"ip-address": "192.168.1.50", "ip-address-type": "ipv4", "prefix": 24}
                ]
            },
            {
                "name": "docker0"
            }
        ]
    }"#;

    #[test]
    fn decodes_bare_agent_reply() {
        let r = InterfaceQueryResult::from_json(AGENT_REPLY).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.result[0].name.as_deref(), Some("lo"));
        assert_eq!(r.result[0].addresses.len(), 2);
        assert_eq!(
            r.result[1].hardware_address.as_deref(),
            Some("bc:24:11:aa:bb:cc")
        );
        assert_eq!(r.result[1].addresses[0].address(), "192.168.1.50");
        assert_eq!(
            r.result[1].addresses[0].address_type(),
            &AddressFamily::Ipv4
        );
        assert!(r.result[2].addresses.is_empty());
    }

    #[test]
    fn decodes_api_envelope() {
        let wrapped = format!(r#"{{"data": {AGENT_REPLY}}}"#);
        let r = InterfaceQueryResult::from_json(&wrapped).unwrap();
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn empty_result_is_valid() {
        let r = InterfaceQueryResult::from_json(r#"{"result": []}"#).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn decode_error_keeps_field_and_position() {
        let json = r#"{"result": [{"ip-addresses": [
            {"ip-address": "192.168.1.1", "ip-address-type": "ipv4", "prefix": 24},
            {"ip-address": "10.0.0.1", "ip-address-type": "ipv4", "prefix": -3}
        ]}]}"#;

        let Err(ModelError::Decode(msg)) = InterfaceQueryResult::from_json(json) else {
            panic!("expected decode error");
        };
        assert!(msg.contains("`prefix`"), "field not named: {msg}");
        assert!(msg.contains("line 3"), "position not reported: {msg}");
    }

    #[test]
    fn envelope_error_names_missing_field() {
        let Err(ModelError::Decode(msg)) =
            InterfaceQueryResult::from_json(r#"{"data": {"nope": 1}}"#)
        else {
            panic!("expected decode error");
        };
        assert!(msg.contains("`result`"), "field not named: {msg}");
    }

    #[test]
    fn malformed_payload_is_decode_error() {
        for bad in ["", "[]", "{}", r#"{"result": 5}"#, r#"{"data": {"nope": 1}}"#] {
            let err = InterfaceQueryResult::from_json(bad);
            assert!(
                matches!(err, Err(ModelError::Decode(_))),
                "expected decode error for {bad:?}, got {err:?}"
            );
        }
    }
}
