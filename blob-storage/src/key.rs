use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BlobError;

/// Names a blob inside a [`crate::BlobStore`]. Rendered as a hyphenated UUID,
/// which is also the blob's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlobKey(Uuid);

impl BlobKey {
    pub fn random() -> Self {
        BlobKey(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for BlobKey {
    type Err = BlobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(BlobKey)
            .map_err(|_| BlobError::InvalidKey(s.to_string()))
    }
}

impl TryFrom<String> for BlobKey {
    type Error = BlobError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BlobKey> for String {
    fn from(key: BlobKey) -> Self {
        key.to_string()
    }
}

impl From<Uuid> for BlobKey {
    fn from(uuid: Uuid) -> Self {
        BlobKey(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse() {
        let key = BlobKey::random();
        let rendered = key.to_string();
        assert_eq!(rendered.len(), 36);
        assert_eq!(rendered.parse::<BlobKey>().unwrap(), key);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("not-a-key".parse::<BlobKey>(), Err(BlobError::InvalidKey(_))));
        assert!("".parse::<BlobKey>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let key: BlobKey = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"67e55044-10b1-426f-9247-bb680e5fe0c8\"");
        assert_eq!(serde_json::from_str::<BlobKey>(&json).unwrap(), key);
        assert!(serde_json::from_str::<BlobKey>("\"nope\"").is_err());
    }
}
