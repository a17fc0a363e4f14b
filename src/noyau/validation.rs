// src/noyau/validation.rs
//
// Validation syntaxique d’une expression DÉJÀ normalisée.
// Échec rapide : première violation => ExpressionInvalide.
//
// Ordre des contrôles :
// - vide
// - jeu de caractères [0-9 + - * / . ( )]
// - parenthèses (compteur : jamais < 0, vaut 0 à la fin)
// - fin sur + - * /
// - début sur + * /  (un '-' initial reste permis : opérande négatif)
// - opérateurs répétés : paire dans {+,*,/} ou paire dans {+,-}
//
// NOTE: "2*-3" ou "2-*3" passent ici ; c’est l’évaluation du postfixe
// qui les rejette (opérandes insuffisantes).

use super::erreur::ErreurCalcul;

fn est_caractere_permis(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')')
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn est_multiplicatif_ou_plus(c: char) -> bool {
    matches!(c, '+' | '*' | '/')
}

fn est_signe(c: char) -> bool {
    matches!(c, '+' | '-')
}

fn parentheses_equilibrees(s: &str) -> bool {
    let mut ouvertes: usize = 0;
    for c in s.chars() {
        match c {
            '(' => ouvertes += 1,
            ')' => {
                if ouvertes == 0 {
                    return false;
                }
                ouvertes -= 1;
            }
            _ => {}
        }
    }
    ouvertes == 0
}

fn a_operateurs_repetes(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).any(|w| {
        (est_multiplicatif_ou_plus(w[0]) && est_multiplicatif_ou_plus(w[1]))
            || (est_signe(w[0]) && est_signe(w[1]))
    })
}

/// Valide une expression normalisée.
pub fn valider(s: &str) -> Result<(), ErreurCalcul> {
    if s.is_empty() {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    if !s.chars().all(est_caractere_permis) {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    if !parentheses_equilibrees(s) {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    if s.chars().last().is_some_and(est_operateur) {
        return Err(ErreurCalcul::ExpressionInvalide);
    }
    if s.chars().next().is_some_and(est_multiplicatif_ou_plus) {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    if a_operateurs_repetes(s) {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    Ok(())
}
