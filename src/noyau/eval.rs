//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> signe de tête (option) -> forme `N (op N)*` -> pli gauche -> droite
//!
//! Pas de priorité des opérateurs : `2+3*4` vaut `(2+3)*4 = 20`,
//! comme une calculatrice quatre opérations.
//! Fonction pure : aucun état entre deux appels.

use thiserror::Error;

use super::jetons::{format_tokens, tokenize, Operator, Token};

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("expression invalide")]
    InvalidExpression,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("dépassement de capacité")]
    Overflow,
}

/// Paramètres du noyau.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Accepte un `+` ou `-` en tête (`-5+3`). Refusé par défaut.
    pub allow_leading_sign: bool,
}

/// API publique : évalue avec les options par défaut.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    evaluate_with(expression, EvalOptions::default())
}

/// Évalue une expression du pavé.
/// - "" => Ok(0.0) (rien de saisi = zéro)
/// - forme invalide / nombre illisible ou hors domaine f64 => InvalidExpression
/// - x/0 (zéro exact) => DivisionByZero
/// - pli qui sort du domaine fini => Overflow
pub fn evaluate_with(expression: &str, options: EvalOptions) -> Result<f64, EvaluationError> {
    if expression.is_empty() {
        return Ok(0.0);
    }

    // 1) Jetons
    let mut jetons = tokenize(expression)?;
    log::debug!("jetons: {}", format_tokens(&jetons));

    // 2) Signe de tête (seulement si autorisé) : "-5" devient Number(-5)
    if options.allow_leading_sign {
        replie_signe_de_tete(&mut jetons);
    }

    // 3) Forme: longueur impaire, nombres aux indices pairs, opérateurs aux impairs
    verifie_forme(&jetons)?;

    // 4) Pli gauche -> droite
    let Some(Token::Number(premier)) = jetons.first().copied() else {
        return Err(EvaluationError::InvalidExpression);
    };

    let mut acc = premier;
    for paire in jetons[1..].chunks_exact(2) {
        let (Token::Operator(op), Token::Number(rhs)) = (paire[0], paire[1]) else {
            return Err(EvaluationError::InvalidExpression);
        };
        acc = applique(acc, op, rhs)?;
    }

    Ok(acc)
}

/// `[Op(+|-), Number(n), ...]` -> `[Number(±n), ...]`.
/// Tout autre début est laissé tel quel (verifie_forme tranchera).
fn replie_signe_de_tete(jetons: &mut Vec<Token>) {
    let (Some(&Token::Operator(op)), Some(&Token::Number(n))) = (jetons.first(), jetons.get(1))
    else {
        return;
    };
    if !op.est_signe() {
        return;
    }

    let v = if op == Operator::Sub { -n } else { n };
    jetons.remove(0);
    jetons[0] = Token::Number(v);
}

fn verifie_forme(jetons: &[Token]) -> Result<(), EvaluationError> {
    if jetons.len() % 2 == 0 {
        // vide, opérateur final, opérateurs consécutifs (cas pair)
        return Err(EvaluationError::InvalidExpression);
    }

    let alterne = jetons.iter().enumerate().all(|(i, t)| match t {
        Token::Number(_) => i % 2 == 0,
        Token::Operator(_) => i % 2 == 1,
    });

    if alterne {
        Ok(())
    } else {
        Err(EvaluationError::InvalidExpression)
    }
}

fn applique(acc: f64, op: Operator, rhs: f64) -> Result<f64, EvaluationError> {
    let v = match op {
        Operator::Add => acc + rhs,
        Operator::Sub => acc - rhs,
        Operator::Mul => acc * rhs,
        Operator::Div => {
            // zéro exact, pas de tolérance
            if rhs == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            acc / rhs
        }
    };

    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvaluationError::Overflow)
    }
}
