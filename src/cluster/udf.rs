//! User-Defined Function Metadata

use serde::{Deserialize, Serialize};

/// Registration blob for a user-defined function. The catalog only cares
/// about the declared schema; the rest is carried for the function
/// resolution layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDefinedFunctionMetadata {
    pub schema: String,
    pub name: String,
    pub arg_types: Vec<String>,
    pub return_type: String,
    pub language: String,
    pub body: String,
}

impl UserDefinedFunctionMetadata {
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        arg_types: Vec<String>,
        return_type: impl Into<String>,
        language: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        UserDefinedFunctionMetadata {
            schema: schema.into(),
            name: name.into(),
            arg_types,
            return_type: return_type.into(),
            language: language.into(),
            body: body.into(),
        }
    }
}
