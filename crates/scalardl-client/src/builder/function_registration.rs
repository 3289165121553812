//! Function registration. Unsigned; functions are not auditor-coordinated.

use crate::messages::FunctionRegistrationRequest;

#[derive(Debug, Default)]
pub struct FunctionRegistrationRequestBuilder {
    function_id: String,
    function_binary_name: String,
    function_byte_code: Vec<u8>,
}

impl FunctionRegistrationRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_function_id(mut self, id: impl Into<String>) -> Self {
        self.function_id = id.into();
        self
    }

    pub fn with_function_binary_name(mut self, name: impl Into<String>) -> Self {
        self.function_binary_name = name.into();
        self
    }

    pub fn with_function_byte_code(mut self, byte_code: Vec<u8>) -> Self {
        self.function_byte_code = byte_code;
        self
    }

    pub fn build(self) -> FunctionRegistrationRequest {
        FunctionRegistrationRequest {
            function_id: self.function_id,
            function_binary_name: self.function_binary_name,
            function_byte_code: self.function_byte_code,
        }
    }
}
