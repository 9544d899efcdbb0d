use serde::{de::DeserializeOwned, Deserialize, Serialize};

// Only JSON well-formedness is checked: absent fields fall back to empty
// strings and unknown fields (a client-sent `id`, say) are ignored.

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateComment {
	pub username: String,
	pub content: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateComment {
	pub content: String,
}

/// Decodes a request body that must be a JSON object.
///
/// Derived struct visitors also take sequences, so `["a", "b"]` would otherwise
/// decode positionally. Anything but an object is rejected, `null` included.
pub fn from_json_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
	match serde_json::from_slice::<serde_json::Value>(body)? {
		value @ serde_json::Value::Object(_) => serde_json::from_value(value),
		other => Err(serde::de::Error::custom(format!("expected a JSON object, found {other}"))),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_create_comment_ignores_unknown_fields() {
		let command: CreateComment = serde_json::from_str(r#"{"id": 42, "username": "bob", "content": "hi"}"#).unwrap();
		assert_eq!(command.username, "bob");
		assert_eq!(command.content, "hi");
	}

	#[test]
	fn test_missing_fields_default_to_empty() {
		let command: UpdateComment = serde_json::from_str("{}").unwrap();
		assert_eq!(command.content, "");
	}

	#[test]
	fn test_non_object_payload_is_rejected() {
		assert!(from_json_object::<CreateComment>(b"not json").is_err());
		assert!(from_json_object::<CreateComment>(b"").is_err());
		assert!(from_json_object::<CreateComment>(b"[]").is_err());
		assert!(from_json_object::<CreateComment>(br#"["a", "b"]"#).is_err());
		assert!(from_json_object::<CreateComment>(b"null").is_err());
		assert!(from_json_object::<UpdateComment>(br#""text""#).is_err());
		assert!(from_json_object::<UpdateComment>(br#"{"content": 3}"#).is_err());
	}

	#[test]
	fn test_object_payload_is_decoded() {
		let command: CreateComment = from_json_object(br#"{"username": "bob", "content": "hi"}"#).unwrap();
		assert_eq!(command.username, "bob");
		assert_eq!(command.content, "hi");
	}
}
