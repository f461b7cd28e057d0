// src/noyau/jetons.rs

use super::eval::EvaluationError;

/// Les quatre opérateurs binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Classement d’un caractère : `None` si ce n’est pas un opérateur.
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Vrai pour + et - (seuls signes acceptés en tête d’expression).
    pub fn est_signe(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

/// État du découpage (un seul passage, gauche -> droite).
/// `AccumulatingNumber` <=> un nombre est en cours (tampon non vide).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Etat {
    AccumulatingNumber,
    BetweenTokens,
}

/// Tokenize une chaîne du pavé en jetons.
/// Supporte:
/// - chiffres et point décimal (accumulés dans le nombre courant)
/// - opérateurs + - * /
///
/// Le point est accepté sans condition : "1.2.3" passe ici et échoue
/// au parse f64.
/// Tout autre caractère (espaces compris) => `InvalidExpression`.
pub fn tokenize(s: &str) -> Result<Vec<Token>, EvaluationError> {
    let mut out = Vec::new();
    let mut courant = String::new();
    let mut etat = Etat::BetweenTokens;

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            courant.push(c);
            etat = Etat::AccumulatingNumber;
            continue;
        }

        let Some(op) = Operator::depuis_char(c) else {
            log::debug!("caractère inattendu: {c:?}");
            return Err(EvaluationError::InvalidExpression);
        };

        if etat == Etat::AccumulatingNumber {
            out.push(Token::Number(parse_nombre(&std::mem::take(&mut courant))?));
        }
        out.push(Token::Operator(op));
        etat = Etat::BetweenTokens;
    }

    // fin d’entrée : dernier nombre éventuel
    if etat == Etat::AccumulatingNumber {
        out.push(Token::Number(parse_nombre(&courant)?));
    }

    Ok(out)
}

/// Parse f64 d’un nombre accumulé.
/// Illisible ("1.2.3") ou hors domaine f64 (400 chiffres => infini)
/// : `InvalidExpression` dans les deux cas.
fn parse_nombre(s: &str) -> Result<f64, EvaluationError> {
    let v: f64 = s.parse().map_err(|_| EvaluationError::InvalidExpression)?;
    if !v.is_finite() {
        return Err(EvaluationError::InvalidExpression);
    }
    Ok(v)
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Token::Number(v) => format!("{v}"),
            Token::Operator(op) => op.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
