//! Typed field access over marketplace JSON.
//!
//! Values arrive as JSON strings (decimal or `0x` hex) or small JSON numbers.
//! Each accessor parses into the matching ABI type and reports the full
//! field path on failure.

use std::str::FromStr;

use alloy_primitives::{Address, Bytes, B256, U256};
use serde_json::{Map, Value};

use crate::error::PurchaseError;

type FieldResult<T> = std::result::Result<T, PurchaseError>;

/// A JSON object plus the path it was reached by.
pub(crate) struct Fields<'a> {
    object: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(value: &'a Value, path: impl Into<String>) -> FieldResult<Self> {
        let path = path.into();
        let object = value
            .as_object()
            .ok_or_else(|| PurchaseError::malformed(path.clone(), "expected an object"))?;
        Ok(Self { object, path })
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    pub(crate) fn optional(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn get(&self, key: &str) -> FieldResult<&'a Value> {
        self.optional(key)
            .ok_or_else(|| PurchaseError::malformed(self.path_of(key), "missing"))
    }

    pub(crate) fn object(&self, key: &str) -> FieldResult<Fields<'a>> {
        Fields::new(self.get(key)?, self.path_of(key))
    }

    pub(crate) fn array(&self, key: &str) -> FieldResult<&'a Vec<Value>> {
        self.get(key)?
            .as_array()
            .ok_or_else(|| PurchaseError::malformed(self.path_of(key), "expected an array"))
    }

    pub(crate) fn string(&self, key: &str) -> FieldResult<&'a str> {
        self.get(key)?
            .as_str()
            .ok_or_else(|| PurchaseError::malformed(self.path_of(key), "expected a string"))
    }

    pub(crate) fn uint(&self, key: &str) -> FieldResult<U256> {
        parse_uint(self.get(key)?).map_err(|reason| PurchaseError::malformed(self.path_of(key), reason))
    }

    pub(crate) fn uint8(&self, key: &str) -> FieldResult<u8> {
        let value = self.uint(key)?;
        u8::try_from(value)
            .map_err(|_| PurchaseError::malformed(self.path_of(key), "does not fit uint8"))
    }

    pub(crate) fn address(&self, key: &str) -> FieldResult<Address> {
        Address::from_str(self.string(key)?.trim())
            .map_err(|e| PurchaseError::malformed(self.path_of(key), e))
    }

    pub(crate) fn bytes32(&self, key: &str) -> FieldResult<B256> {
        B256::from_str(self.string(key)?.trim())
            .map_err(|e| PurchaseError::malformed(self.path_of(key), e))
    }

    pub(crate) fn bytes(&self, key: &str) -> FieldResult<Bytes> {
        Bytes::from_str(self.string(key)?.trim())
            .map_err(|e| PurchaseError::malformed(self.path_of(key), e))
    }
}

/// Parse an unsigned integer from a JSON string or non-negative integer.
pub(crate) fn parse_uint(value: &Value) -> std::result::Result<U256, String> {
    match value {
        Value::String(s) => U256::from_str(s.trim()).map_err(|e| e.to_string()),
        Value::Number(n) => n
            .as_u64()
            .map(U256::from)
            .ok_or_else(|| format!("{n} is not an unsigned integer")),
        other => Err(format!("expected an integer, got {other}")),
    }
}
