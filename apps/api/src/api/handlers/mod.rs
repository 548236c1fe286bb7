use serde::{Deserialize, Deserializer};

pub mod health;
pub mod players;
pub mod teams;

/// Treats an explicit JSON `null` like an absent field
///
/// Pair with `#[serde(default)]` so both cases fall through to validation.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::players::PlayerRequest;

    #[test]
    fn null_and_missing_fields_read_as_empty() {
        let req: PlayerRequest =
            serde_json::from_str(r#"{"name":"Ronaldo","nickname":null}"#).unwrap();

        assert_eq!(req.name, "Ronaldo");
        assert_eq!(req.nickname, "");
        assert_eq!(req.position, "");
    }

    #[test]
    fn wrong_type_is_still_an_error() {
        assert!(serde_json::from_str::<PlayerRequest>(r#"{"name":7}"#).is_err());
    }
}
