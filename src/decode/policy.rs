use serde::Deserialize;

/// How payloads that do not match a model's wire shape exactly are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct DecodePolicy {
    #[serde(default)]
    pub missing_fields: MissingFields,
    #[serde(default)]
    pub unknown_fields: UnknownFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFields {
    /// A missing non-optional field fails the decode.
    #[default]
    Reject,
    /// A missing field takes the zero value of its type.
    ZeroFill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFields {
    #[default]
    Ignore,
    Reject,
}
