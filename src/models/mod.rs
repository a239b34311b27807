//! Wire types exchanged with the gym API.

mod exercise;
mod user;

pub use exercise::{ExerciseDto, HistoryRegistration};
pub use user::{NewUser, ProfileUpdate, SessionResponse, SignInRequest, UserDto};

use serde::Deserializer;

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize)]
    struct WithId {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
    }

    #[test]
    fn test_deserialize_id_accepts_string_and_integer() {
        let from_str: WithId = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        let from_int: WithId = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(from_str.id, "abc");
        assert_eq!(from_int.id, "42");
    }

    #[test]
    fn test_deserialize_id_rejects_other_types() {
        assert!(serde_json::from_str::<WithId>(r#"{"id":true}"#).is_err());
    }
}
