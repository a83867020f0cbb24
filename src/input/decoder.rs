//! Decoding of structured input records

use crate::error::Result;
use serde::de::DeserializeOwned;

pub trait RecordDecoder {
    fn decode<T: DeserializeOwned>(&self, content: &str) -> Result<T>;
}

pub struct JsonDecoder;

impl RecordDecoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        Ok(serde_json::from_str(content)?)
    }
}

pub struct TomlDecoder;

impl RecordDecoder for TomlDecoder {
    fn decode<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        Ok(toml::from_str(content)?)
    }
}
