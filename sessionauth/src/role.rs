use serde::{Deserialize, Serialize};
use std::fmt::Display;

//--------------------------------------------------------------------------------------------------
// Roles an identity can hold
//--------------------------------------------------------------------------------------------------

// Serialized exactly as shown to users, any other string fails to deserialize
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Administrator,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::User => "User",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//--------------------------------------------------------------------------------------------------
