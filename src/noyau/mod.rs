//! Noyau de calcul (quatre opérations, pli gauche -> droite)
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (nombres / opérateurs)
//! - eval.rs     : forme + pli + erreurs typées
//! - format.rs   : affichage d’un résultat (côté UI)

pub mod eval;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{evaluate, evaluate_with, EvalOptions, EvaluationError};
pub use format::format_resultat;
