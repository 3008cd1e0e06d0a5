use serde::Deserialize;
use std::fmt::{Debug, Formatter};

//--------------------------------------------------------------------------------------------------
// New types for credentials as they arrive from the client
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Username(s.to_string())
    }
}

// Stored and compared as given, hashing is out of scope for this service
#[derive(Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct CredentialSecret(String);

impl CredentialSecret {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, other: &CredentialSecret) -> bool {
        self.0 == other.0
    }
}

impl From<&str> for CredentialSecret {
    fn from(s: &str) -> Self {
        CredentialSecret(s.to_string())
    }
}

impl Debug for CredentialSecret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("CredentialSecret(..)")
    }
}

//--------------------------------------------------------------------------------------------------
