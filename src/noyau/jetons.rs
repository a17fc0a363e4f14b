// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;
use super::normalise::est_blanc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte brut du numéral : la lecture décimale se fait à l’évaluation,
    // c’est là qu’un "2..3" est refusé.
    Num(String),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Tok {
    pub fn est_operateur(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash)
    }
}

/// Tokenize une expression normalisée en jetons.
/// Supporte:
/// - numéraux : suite maximale de chiffres et de '.' (ex: 12, 3.5, .5, 2..3)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Les espaces sont ignorés (défense en profondeur : normalement déjà retirés).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_blanc(c) {
            i += 1;
            continue;
        }

        let op = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = op {
            out.push(t);
            i += 1;
            continue;
        }

        // Numéral : maximal munch sur [0-9.]
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        tracing::debug!(caractere = %c, "caractère inattendu à la tokenisation");
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    Ok(out)
}

/// Liste de jetons en texte, séparés par un espace (forme postfixe affichée).
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.as_str(),
            Tok::Plus => "+",
            Tok::Minus => "-",
            Tok::Star => "*",
            Tok::Slash => "/",
            Tok::LPar => "(",
            Tok::RPar => ")",
        };
        out.push(s);
    }
    out.join(" ")
}
