//! Hachage des mots de passe : bcrypt (sel et coût inclus dans le hash stocké).
//!
//! Format stocké : chaîne modulaire `$2b$<coût>$<sel+empreinte>`.

use super::{AuthError, PasswordHasher};

/// Coût bcrypt en service (2^14 tours).
#[cfg(not(test))]
const COUT_DEFAUT: u32 = 14;

/// Coût minimal accepté par bcrypt : tests rapides.
#[cfg(test)]
const COUT_DEFAUT: u32 = 4;

#[derive(Clone, Copy, Debug)]
pub struct BcryptHachage {
    cout: u32,
}

impl BcryptHachage {
    pub fn new(cout: u32) -> Self {
        Self { cout }
    }
}

impl Default for BcryptHachage {
    fn default() -> Self {
        Self::new(COUT_DEFAUT)
    }
}

impl PasswordHasher for BcryptHachage {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        bcrypt::hash(password, self.cout).map_err(|e| AuthError::Hachage(e.to_string()))
    }

    /// Hash mal formé (préfixe, coût, base64) => false.
    fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(ok) => ok,
            Err(e) => {
                log::debug!("hash illisible: {e}");
                false
            }
        }
    }
}
