//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de l’application (tampon d’expression, erreur,
//! formulaires login / inscription) et offrir les actions des boutons
//! sans logique d’affichage.
//!
//! Contrats :
//! - Le tampon appartient à l’état ; le noyau le reçoit par référence sur "=".
//! - Erreur de calcul => tampon inchangé (l’utilisateur corrige).
//! - Actions déterministes, sans effet de bord caché (hors journal).

use crate::comptes::{BcryptHachage, Comptes, MemoireComptes};
use crate::noyau::jetons::Operator;
use crate::noyau::{evaluate_with, format_resultat, EvalOptions};

pub type ComptesApp = Comptes<MemoireComptes, BcryptHachage>;

/// Pavé 4×4 (ordre d’affichage, ligne par ligne).
pub const PAVE: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(Operator),
    Egal,
}

impl Touche {
    /// Label de bouton -> touche (`None` si inconnu).
    pub fn depuis_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' => Some(Touche::Point),
            '=' => Some(Touche::Egal),
            _ => Operator::depuis_char(c).map(Touche::Operateur),
        }
    }
}

#[derive(Debug, Default)]
pub struct AppCalc {
    // --- calculatrice ---
    pub expression: String, // tampon (aussi affiché tel quel)
    pub erreur: String,     // dernière erreur de calcul

    // --- paramètres ---
    pub options: EvalOptions,

    // --- connexion ---
    pub identifiant: String,
    pub mot_de_passe: String,
    pub statut: String,
    pub connecte: Option<String>,

    // --- fenêtre d’inscription ---
    pub inscription_ouverte: bool,
    pub insc_identifiant: String,
    pub insc_mot_de_passe: String,
    pub insc_erreur: String,

    comptes: ComptesApp,
}

impl AppCalc {
    /* ------------------------ Pavé ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.expression.push(c),
            Touche::Operateur(op) => self.expression.push(op.symbole()),
            Touche::Point => {
                // pas de point en tête, pas deux points de suite
                if !self.expression.is_empty() && !self.expression.ends_with('.') {
                    self.expression.push('.');
                }
            }
            Touche::Egal => self.egal(),
        }
    }

    fn egal(&mut self) {
        match evaluate_with(&self.expression, self.options) {
            Ok(v) => {
                self.expression = format_resultat(v);
                self.erreur.clear();
            }
            Err(e) => {
                log::warn!("erreur de calcul sur {:?}: {e}", self.expression);
                self.set_erreur(e.to_string());
            }
        }
    }

    /// DEL : retire le dernier caractère.
    pub fn backspace(&mut self) {
        self.expression.pop();
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.expression.clear();
    }

    /// AC : entrée + erreur + paramètres par défaut.
    pub fn reset_total(&mut self) {
        self.expression.clear();
        self.erreur.clear();
        self.options = EvalOptions::default();
    }

    /// Utilitaire : placer une erreur (le tampon n’est pas touché).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
    }

    /* ------------------------ Connexion / inscription ------------------------ */

    pub fn connexion(&mut self) {
        let resultat = self.comptes.login(&self.identifiant, &self.mot_de_passe);
        self.mot_de_passe.clear();

        match resultat {
            Ok(()) => {
                self.statut = "Connexion réussie".into();
                self.connecte = Some(self.identifiant.clone());
            }
            Err(e) => {
                self.statut = format!("Connexion refusée : {e}");
                self.connecte = None;
            }
        }
    }

    pub fn ouvrir_inscription(&mut self) {
        self.inscription_ouverte = true;
        self.insc_erreur.clear();
    }

    pub fn fermer_inscription(&mut self) {
        self.inscription_ouverte = false;
        self.insc_identifiant.clear();
        self.insc_mot_de_passe.clear();
        self.insc_erreur.clear();
    }

    /// Succès => fenêtre fermée ; échec => fenêtre ouverte + message.
    pub fn inscription(&mut self) {
        let resultat = self
            .comptes
            .register(&self.insc_identifiant, &self.insc_mot_de_passe);
        self.insc_mot_de_passe.clear();

        match resultat {
            Ok(()) => {
                self.statut = format!("Compte créé : {}", self.insc_identifiant);
                self.fermer_inscription();
            }
            Err(e) => self.insc_erreur = e.to_string(),
        }
    }
}
