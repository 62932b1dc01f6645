mod auth;
mod call_function;
mod claim_code;
mod core_info;
mod device;
mod read_variable;
mod simple_response;

pub use auth::{LogInResponse, TokenResponse};
pub use call_function::CallFunctionResponse;
pub use claim_code::ClaimCodeResponse;
pub use core_info::CoreInfo;
pub use device::{CompleteDevice, SimpleDevice};
pub use read_variable::{
    ReadDoubleVariableResponse, ReadIntVariableResponse, ReadObjectVariableResponse, ReadStringVariableResponse, ReadVariableResponse,
    VariableType, VariableValue,
};
pub use simple_response::SimpleResponse;
