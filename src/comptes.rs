// src/comptes.rs
//
// Comptes — login / inscription
// -----------------------------
// Rôle:
// - Contrats des collaborateurs (stockage des identifiants + hachage)
// - Service `Comptes` : connexion + inscription, chaque issue journalisée
//
// Le stockage réel (table SQL, fichier) et l’algorithme de hachage sont
// interchangeables : le service ne voit que les deux traits ci-dessous.

pub mod hachage;
pub mod memoire;

pub use hachage::BcryptHachage;
pub use memoire::MemoireComptes;

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("identifiant inconnu")]
    NotFound,

    #[error("identifiant déjà utilisé")]
    DuplicateUsername,

    #[error("mot de passe incorrect")]
    Mismatch,

    #[error("identifiant vide")]
    EmptyUsername,

    #[error("échec du hachage: {0}")]
    Hachage(String),
}

/// Stockage des identifiants : username -> hash du mot de passe.
pub trait CredentialStore {
    fn lookup(&self, username: &str) -> Option<String>;

    /// `DuplicateUsername` si l’identifiant existe déjà (rien n’est écrasé).
    fn insert(&mut self, username: &str, password_hash: &str) -> Result<(), AuthError>;
}

pub trait PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError>;
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Service de connexion / inscription.
#[derive(Debug, Default)]
pub struct Comptes<S, H> {
    store: S,
    hasher: H,
}

impl<S: CredentialStore, H: PasswordHasher> Comptes<S, H> {
    pub fn new(store: S, hasher: H) -> Self {
        Self { store, hasher }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let Some(hash) = self.store.lookup(username) else {
            log::warn!("connexion refusée: identifiant inconnu {username:?}");
            return Err(AuthError::NotFound);
        };

        if !self.hasher.verify(password, &hash) {
            log::warn!("connexion refusée: mot de passe incorrect pour {username:?}");
            return Err(AuthError::Mismatch);
        }

        log::info!("connexion réussie: {username:?}");
        Ok(())
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() {
            log::warn!("inscription refusée: identifiant vide");
            return Err(AuthError::EmptyUsername);
        }

        let hash = match self.hasher.hash(password) {
            Ok(h) => h,
            Err(e) => {
                log::warn!("inscription refusée pour {username:?}: {e}");
                return Err(e);
            }
        };
        if let Err(e) = self.store.insert(username, &hash) {
            log::warn!("inscription refusée pour {username:?}: {e}");
            return Err(e);
        }

        log::info!("inscription réussie: {username:?}");
        Ok(())
    }
}
