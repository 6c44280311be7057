use crate::utils::error::Result;
use serde::de::DeserializeOwned;

/// Maps JSON text onto `T`. Unknown keys are ignored and missing keys only
/// matter for fields `T` actually declares.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    let value = serde_json::from_str(text)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{EmptyRecord, RECORD_LITERAL};
    use crate::HelloError;

    #[test]
    fn test_decode_empty_object() {
        let record: EmptyRecord = decode(RECORD_LITERAL).unwrap();
        assert_eq!(record, EmptyRecord {});
    }

    #[test]
    fn test_decode_ignores_extra_keys() {
        let record: EmptyRecord = decode(r#"{"greeting": "hi", "n": 1}"#).unwrap();
        assert_eq!(record, EmptyRecord::default());
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        assert!(matches!(decode::<EmptyRecord>("{"), Err(HelloError::Decode(_))));
        assert!(matches!(decode::<EmptyRecord>("null"), Err(HelloError::Decode(_))));
        assert!(matches!(decode::<EmptyRecord>("\"{}\""), Err(HelloError::Decode(_))));
    }
}
