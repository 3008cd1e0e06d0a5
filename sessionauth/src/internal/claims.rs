use crate::internal::unixtime::UnixTimestamp;
use crate::{Identity, Role, UserId};
use serde::{Deserialize, Serialize};

//--------------------------------------------------------------------------------------------------
// JWT Claims object
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClaimSet {
    id: UserId,
    username: String,
    role: Role,
    iat: UnixTimestamp,
    exp: UnixTimestamp,
}

// Make sure we only assemble it here, so expiry is always one session after issue
impl ClaimSet {
    pub fn new(identity: &Identity, issued_at: UnixTimestamp) -> Self {
        ClaimSet {
            id: identity.id,
            username: identity.username.clone(),
            role: identity.role,
            iat: issued_at,
            exp: issued_at.add_session_duration(),
        }
    }

    pub fn subject_id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn issued_at(&self) -> UnixTimestamp {
        self.iat
    }

    pub fn expires_at(&self) -> UnixTimestamp {
        self.exp
    }

    // Strict: a token expiring exactly now is already expired
    pub fn is_expired_at(&self, now: UnixTimestamp) -> bool {
        self.exp <= now
    }

    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Identity {
        Identity {
            id: UserId::new(1),
            username: "admin".to_string(),
            role: Role::Administrator,
        }
    }

    #[test]
    fn expiry_is_one_hour_after_issue() {
        let issued_at = UnixTimestamp::from_unix(1_700_000_000).unwrap();
        let claims = ClaimSet::new(&admin(), issued_at);
        assert_eq!(claims.expires_at().unix() - claims.issued_at().unix(), 3600);
    }

    #[test]
    fn expiry_boundary_is_strict() {
        let issued_at = UnixTimestamp::from_unix(1_700_000_000).unwrap();
        let claims = ClaimSet::new(&admin(), issued_at);
        let exp = claims.expires_at().unix();
        assert!(!claims.is_expired_at(UnixTimestamp::from_unix(exp - 1).unwrap()));
        assert!(claims.is_expired_at(UnixTimestamp::from_unix(exp).unwrap()));
    }

    #[test]
    fn wire_form_uses_short_claim_names() {
        let issued_at = UnixTimestamp::from_unix(1_700_000_000).unwrap();
        let claims = ClaimSet::new(&admin(), issued_at);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "username": "admin",
                "role": "Administrator",
                "iat": 1_700_000_000,
                "exp": 1_700_003_600,
            })
        );
    }

    #[test]
    fn extra_fields_are_rejected() {
        let json = serde_json::json!({
            "id": 1,
            "username": "admin",
            "role": "Administrator",
            "iat": 1_700_000_000,
            "exp": 1_700_003_600,
            "admin": true,
        });
        assert!(serde_json::from_value::<ClaimSet>(json).is_err());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let json = serde_json::json!({
            "id": 1,
            "username": "admin",
            "role": "Root",
            "iat": 1_700_000_000,
            "exp": 1_700_003_600,
        });
        assert!(serde_json::from_value::<ClaimSet>(json).is_err());
    }
}
