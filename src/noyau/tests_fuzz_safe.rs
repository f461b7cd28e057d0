//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, Ok => valeur finie

use std::time::{Duration, Instant};

use super::{evaluate, evaluate_with, EvalOptions, EvaluationError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const TOUCHES: [char; 15] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/',
];

fn gen_nombre(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(4) as usize;
    let mut s: String = (0..n)
        .map(|_| char::from(b'0' + rng.pick(10) as u8))
        .collect();
    if rng.coin() {
        s.push('.');
        s.push(char::from(b'0' + rng.pick(10) as u8));
    }
    s
}

fn gen_op(rng: &mut Rng) -> char {
    ['+', '-', '*', '/'][rng.pick(4) as usize]
}

/// Expression bien formée `N (op N)*`.
fn gen_bien_forme(rng: &mut Rng, max_ops: u32) -> String {
    let mut s = gen_nombre(rng);
    for _ in 0..rng.pick(max_ops + 1) {
        s.push(gen_op(rng));
        s.push_str(&gen_nombre(rng));
    }
    s
}

/// Suite de touches quelconque (la plupart du temps mal formée).
fn gen_touches(rng: &mut Rng, max_len: u32) -> String {
    (0..rng.pick(max_len + 1))
        .map(|_| TOUCHES[rng.pick(TOUCHES.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_jamais_invalide() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_bien_forme(&mut rng, 8);
        match evaluate(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(EvaluationError::DivisionByZero) => seen_div0 += 1,
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_touches_aleatoires_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_err = 0usize;

    for _ in 0..600 {
        budget(t0, max);

        let expr = gen_touches(&mut rng, 12);
        for options in [
            EvalOptions::default(),
            EvalOptions {
                allow_leading_sign: true,
            },
        ] {
            match evaluate_with(&expr, options) {
                Ok(v) => assert!(v.is_finite(), "expr={expr:?} v={v}"),
                Err(_) => seen_err += 1,
            }
        }
    }

    assert!(seen_err > 0, "aucune erreur vue");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    for _ in 0..100 {
        let ea = gen_touches(&mut a, 10);
        let eb = gen_touches(&mut b, 10);
        assert_eq!(ea, eb);
        assert_eq!(evaluate(&ea), evaluate(&eb));
    }
}
