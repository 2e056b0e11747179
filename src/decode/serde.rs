use ::serde::de::DeserializeOwned;

use super::Decoder;
use crate::Error;

/// Bridges to any serde `DeserializeOwned` type via `serde_json::Value`.
pub fn deserialize<T>() -> Decoder<T>
where
    T: DeserializeOwned + 'static,
{
    Decoder::new(|value| {
        serde_json::from_value(serde_json::Value::from(value))
            .map_err(|err| Error::deserialize(format!("deserialize failed: {err}")))
    })
}
