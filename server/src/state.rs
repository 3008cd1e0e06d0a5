use crate::credentials::CredentialStore;
use sessionauth::extract::SigningKeyProvider;
use sessionauth::SigningKey;
use std::sync::Arc;

//--------------------------------------------------------------------------------------------------
// State given to the handlers
//--------------------------------------------------------------------------------------------------

pub type StateRef = Arc<State>;

pub struct State {
    credentials: CredentialStore,
    signing_key: SigningKey,
    development: bool,
}

impl State {
    pub fn new(credentials: CredentialStore, signing_key: SigningKey, development: bool) -> Self {
        Self {
            credentials,
            signing_key,
            development,
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn development(&self) -> bool {
        self.development
    }
}

impl SigningKeyProvider for State {
    fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

//--------------------------------------------------------------------------------------------------
