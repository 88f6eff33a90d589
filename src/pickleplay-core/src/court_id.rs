use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourtId(String);

impl CourtId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CourtId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourtId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for CourtId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for CourtId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
