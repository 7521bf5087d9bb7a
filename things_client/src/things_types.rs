use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct IdentifyRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessRequest<'a> {
    pub token: &'a str,
    #[serde(rename = "chanID")]
    pub chan_id: &'a str,
}

/// Identity resolved by the things service.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ThingId {
    pub value: String,
}

impl ThingId {
    pub fn new<V: Into<String>>(value: V) -> Self {
        ThingId {
            value: value.into(),
        }
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_request_wire_format() {
        let req = AccessRequest {
            token: "key",
            chan_id: "c1",
        };

        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"token":"key","chanID":"c1"}"#
        );
    }

    #[test]
    fn thing_id_wire_format() {
        let id: ThingId = serde_json::from_str(r#"{"value":"u1"}"#).unwrap();
        assert_eq!(id, ThingId::new("u1"));
    }
}
