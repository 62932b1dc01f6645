mod http;
mod policy;

pub use http::{read_json, read_json_list};
pub use policy::{DecodePolicy, MissingFields, UnknownFields};

use crate::responses::{
    CallFunctionResponse, ClaimCodeResponse, CompleteDevice, CoreInfo, LogInResponse, ReadVariableResponse, SimpleDevice, SimpleResponse,
    TokenResponse, VariableType, VariableValue,
};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// A response model that can be decoded under a [`DecodePolicy`].
///
/// `T::default()` encoded to JSON is the wire shape of the model: its keys are the accepted keys and its values are the
/// zero values used by [`MissingFields::ZeroFill`].
pub trait WireModel: Serialize + DeserializeOwned + Default {
    /// Wire keys holding an optional nested model, paired with the wire shape of that model. The policy applies to
    /// the nested keys when the model is present; an absent one stays absent.
    fn nested_models() -> Vec<(&'static str, Value)> {
        Vec::new()
    }
}

impl WireModel for CoreInfo {}
impl WireModel for SimpleDevice {}
impl WireModel for CompleteDevice {}
impl WireModel for TokenResponse {}
impl WireModel for LogInResponse {}
impl WireModel for CallFunctionResponse {}
impl WireModel for SimpleResponse {}
impl WireModel for ClaimCodeResponse {}

impl<T> WireModel for ReadVariableResponse<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    fn nested_models() -> Vec<(&'static str, Value)> {
        vec![("coreInfo", serde_json::to_value(CoreInfo::default()).unwrap_or_default())]
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("expected a JSON array")]
    NotAnArray,
    #[error("unknown field '{field}'")]
    UnknownField { field: String },
    #[error("service responded with {status}: {response}")]
    Api { status: StatusCode, response: SimpleResponse },
    #[error("could not read the response body: {0}")]
    Request(#[from] reqwest::Error),
}

pub fn decode_str<T: WireModel>(body: &str, policy: &DecodePolicy) -> Result<T, DecodeError> {
    decode(body.as_bytes(), policy)
}

#[instrument(skip(body, policy), fields(model = std::any::type_name::<T>()))]
pub fn decode<T: WireModel>(body: &[u8], policy: &DecodePolicy) -> Result<T, DecodeError> {
    let value = serde_json::from_slice::<Value>(body)?;
    decode_value(value, policy)
}

/// Decodes a top-level array, such as the device listing, applying the policy to every element.
#[instrument(skip(body, policy), fields(model = std::any::type_name::<T>()))]
pub fn decode_list<T: WireModel>(body: &[u8], policy: &DecodePolicy) -> Result<Vec<T>, DecodeError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(elements) => {
            debug!("Decoding {} elements", elements.len());
            elements.into_iter().map(|element| decode_value(element, policy)).collect()
        }
        _ => Err(DecodeError::NotAnArray),
    }
}

/// Decodes a variable read as the variant matching `variable_type`.
pub fn decode_variable(
    body: &[u8],
    variable_type: VariableType,
    policy: &DecodePolicy,
) -> Result<ReadVariableResponse<VariableValue>, DecodeError> {
    let response = match variable_type {
        VariableType::Int => decode::<ReadVariableResponse<i32>>(body, policy)?.map_result(VariableValue::Int),
        VariableType::Double => decode::<ReadVariableResponse<f64>>(body, policy)?.map_result(VariableValue::Double),
        VariableType::String => decode::<ReadVariableResponse<String>>(body, policy)?.map_result(VariableValue::String),
        VariableType::Opaque => decode::<ReadVariableResponse<Value>>(body, policy)?.map_result(VariableValue::Opaque),
    };
    Ok(response)
}

pub(crate) fn decode_value<T: WireModel>(mut value: Value, policy: &DecodePolicy) -> Result<T, DecodeError> {
    let Value::Object(fields) = &mut value else {
        return Err(DecodeError::NotAnObject);
    };

    if policy.unknown_fields == UnknownFields::Reject || policy.missing_fields == MissingFields::ZeroFill {
        let Value::Object(shape) = serde_json::to_value(T::default())? else {
            return Err(DecodeError::NotAnObject);
        };

        if policy.unknown_fields == UnknownFields::Reject {
            reject_unknown_fields(fields, &shape, &T::nested_models(), "")?;
        }
        if policy.missing_fields == MissingFields::ZeroFill {
            fill_missing_fields(fields, &shape, &T::nested_models());
        }
    }

    Ok(serde_json::from_value(value)?)
}

fn nested_shape<'a>(nested: &'a [(&str, Value)], key: &str) -> Option<&'a Map<String, Value>> {
    nested.iter().find(|(name, _)| *name == key).and_then(|(_, shape)| shape.as_object())
}

fn reject_unknown_fields(
    fields: &Map<String, Value>,
    shape: &Map<String, Value>,
    nested: &[(&str, Value)],
    path: &str,
) -> Result<(), DecodeError> {
    for (key, value) in fields {
        if !shape.contains_key(key) {
            return Err(DecodeError::UnknownField { field: format!("{path}{key}") });
        }

        if let (Value::Object(inner), Some(inner_shape)) = (value, nested_shape(nested, key)) {
            reject_unknown_fields(inner, inner_shape, &[], &format!("{path}{key}."))?;
        }
    }
    Ok(())
}

// Only absent keys are filled, an explicit null is left for serde to judge.
fn fill_missing_fields(fields: &mut Map<String, Value>, shape: &Map<String, Value>, nested: &[(&str, Value)]) {
    for (key, zero) in shape {
        match fields.get_mut(key) {
            None => {
                trace!(field = %key, "Filling missing field with its zero value");
                fields.insert(key.clone(), zero.clone());
            }
            Some(Value::Object(inner)) => {
                if let Some(inner_shape) = nested_shape(nested, key) {
                    fill_missing_fields(inner, inner_shape, &[]);
                }
            }
            Some(_) => {}
        }
    }
}
