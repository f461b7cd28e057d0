//! Stockage en mémoire des identifiants (durée de vie = celle de l’app).

use std::collections::HashMap;

use super::{AuthError, CredentialStore};

/// Non persistant : les comptes sont perdus à la fermeture de l’app.
#[derive(Clone, Debug, Default)]
pub struct MemoireComptes {
    hashes: HashMap<String, String>,
}

impl CredentialStore for MemoireComptes {
    fn lookup(&self, username: &str) -> Option<String> {
        self.hashes.get(username).cloned()
    }

    fn insert(&mut self, username: &str, password_hash: &str) -> Result<(), AuthError> {
        if self.hashes.contains_key(username) {
            return Err(AuthError::DuplicateUsername);
        }
        self.hashes
            .insert(username.to_string(), password_hash.to_string());
        Ok(())
    }
}
