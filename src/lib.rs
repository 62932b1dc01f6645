pub mod app_config;
pub mod decode;
pub mod responses;

pub use decode::{DecodeError, DecodePolicy, MissingFields, UnknownFields, WireModel, decode, decode_list, decode_str, decode_variable};
