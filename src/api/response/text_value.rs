use serde_json::Value;

/// Inventory field rendered as text. The API mixes JSON strings and numbers
/// (e.g. `nameplateCapacity`), both are kept as their textual form.
#[derive(Debug, Clone, PartialEq)]
pub struct TextValue(pub String);

impl<'de> serde::Deserialize<'de> for TextValue {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(d)?;

        match value {
            Value::String(s) => Ok(TextValue(s)),
            Value::Null => Err(serde::de::Error::custom("null inventory field")),
            other => Ok(TextValue(other.to_string())),
        }
    }
}

impl From<TextValue> for String {
    fn from(v: TextValue) -> Self {
        v.0
    }
}
