use serde::Deserialize;
use serde_with::{base64::Base64, serde_as};

/// Header carrying a name of a hook that issued a request.
pub const HOOK_HEADER: &'static str = "vernemq-hook";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HookType {
    Register,
    Publish,
    Subscribe,
}

impl HookType {
    pub fn name(&self) -> &'static str {
        match self {
            HookType::Register => "auth_on_register",
            HookType::Publish => "auth_on_publish",
            HookType::Subscribe => "auth_on_subscribe",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            HookType::Register => "/auth_on_register",
            HookType::Publish => "/auth_on_publish",
            HookType::Subscribe => "/auth_on_subscribe",
        }
    }

    /// The broker may put more than one token into the hook header, so a hook
    /// name is looked up as a substring.
    pub fn matches_header(&self, header_value: &str) -> bool {
        header_value.contains(self.name())
    }
}

/// `auth_on_register` body. The password is a thing key.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AuthRegisterReq {
    #[serde(default)]
    pub password: String,
}

/// `auth_on_publish` body. The username is a thing key.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AuthPublishReq {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub topic: String,
    #[serde_as(as = "Base64")]
    #[serde(default)]
    pub payload: Vec<u8>,
}

/// `auth_on_subscribe` body. The username is a thing key.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AuthSubscribeReq {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub topic: String,
}

/// Decoded hook request, alive for a single request/response cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum HookRequest {
    Register(AuthRegisterReq),
    Publish {
        req: AuthPublishReq,
        content_type: String,
    },
    Subscribe(AuthSubscribeReq),
}
