//! JSON codec with case-insensitive reads and camelCase writes.
//!
//! # Design
//! The two directions are configured independently:
//! - writes use the camelCase names declared on each model with
//!   `#[serde(rename_all = "camelCase")]`;
//! - reads parse into a `serde_json::Value`, fold every object key to
//!   lowercase, and then deserialize against the lowercase names the models
//!   declare for deserialization. `userId`, `UserId` and `USERID` all land on
//!   the same field.
//!
//! Objects keep document order (`serde_json/preserve_order`), so when two
//! keys of one object differ only by case the later one in the document wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub fn encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    let mut value: Value = serde_json::from_str(body)?;
    fold_keys(&mut value);
    serde_json::from_value(value)
}

fn fold_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let entries = std::mem::take(map);
            *map = entries
                .into_iter()
                .map(|(key, mut child)| {
                    fold_keys(&mut child);
                    (key.to_lowercase(), child)
                })
                .collect::<Map<String, Value>>();
        }
        Value::Array(items) => items.iter_mut().for_each(fold_keys),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Post;
    use serde_json::json;

    #[test]
    fn fold_keys_lowercases_nested_objects_and_arrays() {
        let mut value = json!({
            "UserId": 1,
            "Address": { "Geo": { "LAT": "1" } },
            "Items": [{ "ThumbnailUrl": "x" }]
        });
        fold_keys(&mut value);
        assert_eq!(
            value,
            json!({
                "userid": 1,
                "address": { "geo": { "lat": "1" } },
                "items": [{ "thumbnailurl": "x" }]
            })
        );
    }

    #[test]
    fn fold_keys_leaves_values_untouched() {
        let mut value = json!({ "Title": "Mixed Case Value" });
        fold_keys(&mut value);
        assert_eq!(value["title"], "Mixed Case Value");
    }

    #[test]
    fn later_key_wins_when_keys_differ_only_by_case() {
        let post: Post =
            decode(r#"{"userId":1,"id":1,"title":"a","Title":"b","body":"x"}"#).unwrap();
        assert_eq!(post.title, "b");

        let post: Post =
            decode(r#"{"userId":1,"id":1,"Title":"b","title":"a","body":"x"}"#).unwrap();
        assert_eq!(post.title, "a");
    }

    #[test]
    fn folding_keeps_document_order() {
        let mut value: Value = serde_json::from_str(r#"{"Zeta":1,"alpha":2,"Mid":3}"#).unwrap();
        fold_keys(&mut value);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn decode_rejects_non_json() {
        let result: Result<Value, _> = decode("not json");
        assert!(result.is_err());
    }
}
