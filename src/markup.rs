use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).expect("metadata entries must map to valid json")
}
