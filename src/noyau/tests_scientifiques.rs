//! Tests scientifiques (campagne) : invariants du pli gauche -> droite.
//!
//! - pureté : même entrée => même sortie
//! - forme : opérateurs = opérandes - 1 pour toute entrée bien formée
//! - pli : comparaison avec un pli de référence calculé à la main
//! - budget temps global, tailles bornées

use std::time::{Duration, Instant};

use super::jetons::{tokenize, Token};
use super::{evaluate, evaluate_with, EvalOptions, EvaluationError};

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn compte(expr: &str) -> (usize, usize) {
    let jetons = tokenize(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    let nombres = jetons
        .iter()
        .filter(|t| matches!(t, Token::Number(_)))
        .count();
    (nombres, jetons.len() - nombres)
}

#[test]
fn sci_idempotence() {
    for s in ["", "2+3*4", "5/0", "2++3", "1.5+2.5", "9/3/3", "0.1+0.2"] {
        assert_eq!(evaluate(s), evaluate(s), "expr={s:?}");
    }
}

#[test]
fn sci_operateurs_egal_operandes_moins_un() {
    for s in ["7", "1+2", "1+2*3", "9/3/3-1", "0.5*8+1.25-3/2"] {
        let (nombres, ops) = compte(s);
        assert_eq!(ops + 1, nombres, "expr={s:?}");
        assert!(evaluate(s).is_ok(), "expr={s:?}");
    }
}

#[test]
fn sci_pli_de_reference() {
    // (((8 - 2) * 3) / 4) + 0.5 = 5
    assert_eq!(evaluate("8-2*3/4+0.5"), Ok(5.0));
    // chaîne longue : 1+1+...+1 (200 fois)
    let s = vec!["1"; 200].join("+");
    assert_eq!(evaluate(&s), Ok(200.0));
    // division répétée
    assert_eq!(evaluate("1000/10/10/10"), Ok(1.0));
}

#[test]
fn sci_erreur_sans_resultat_partiel() {
    // l’erreur arrive au milieu du pli : rien n’est rendu d’autre que l’erreur
    assert_eq!(evaluate("1+2/0*3"), Err(EvaluationError::DivisionByZero));
    assert_eq!(evaluate("1+2*"), Err(EvaluationError::InvalidExpression));
}

#[test]
fn sci_magnitudes_extremes_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let grand = format!("1{}", "0".repeat(200));
    let petit = format!("0.{}1", "0".repeat(200));

    let cas = [
        format!("{grand}*{grand}"),
        format!("{grand}/{petit}"),
        format!("{petit}*{petit}"),
        format!("{grand}-{grand}"),
        format!("{petit}/{grand}"),
    ];

    for s in &cas {
        budget(t0, max);
        match evaluate(s) {
            Ok(v) => assert!(v.is_finite(), "expr={s:?} v={v}"),
            Err(e) => assert_eq!(e, EvaluationError::Overflow, "expr={s:?}"),
        }
    }

    // opérande illisible en f64 : refus de lecture, pas un dépassement du pli
    let illisible = "9".repeat(500);
    for s in [illisible.clone(), format!("{illisible}+"), format!("1*{illisible}")] {
        budget(t0, max);
        assert_eq!(evaluate(&s), Err(EvaluationError::InvalidExpression), "expr={s:?}");
    }
}

#[test]
fn sci_option_signe_ne_change_pas_le_reste() {
    let avec = EvalOptions {
        allow_leading_sign: true,
    };
    for s in ["", "2+3*4", "5/0", "2++3", "1.5+2.5", "+", "2+"] {
        assert_eq!(evaluate(s), evaluate_with(s, avec), "expr={s:?}");
    }
}
