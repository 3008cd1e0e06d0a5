use sessionauth::Role;
use serde::Deserialize;

//--------------------------------------------------------------------------------------------------
// Config to be read from file
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct Config {
    #[serde(default)]
    pub debug: bool,
    pub http_port: Option<u16>,
    pub signing_secret: String,
    // Include error detail in 500 responses
    #[serde(default)]
    pub development: bool,
    #[serde(default = "default_users")]
    pub users: Vec<UserEntry>,
}

#[derive(Deserialize, Clone)]
pub struct UserEntry {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub role: Role,
}

fn default_users() -> Vec<UserEntry> {
    let entry = |id, username: &str, password: &str, role| UserEntry {
        id,
        username: username.to_string(),
        password: password.to_string(),
        role,
    };

    vec![
        entry(1, "admin", "admin123", Role::Administrator),
        entry(2, "user", "user123", Role::User),
        entry(3, "Manjula", "password123", Role::User),
    ]
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_secret_given() {
        let cfg: Config = config::Config::builder()
            .set_override("signing_secret", "s3cret")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!cfg.debug);
        assert!(!cfg.development);
        assert_eq!(cfg.http_port, None);
        assert_eq!(cfg.users.len(), 3);
        assert_eq!(cfg.users[0].username, "admin");
        assert_eq!(cfg.users[0].role, Role::Administrator);
    }

    #[test]
    fn secret_is_required() {
        let res = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize::<Config>();
        assert!(res.is_err());
    }
}
