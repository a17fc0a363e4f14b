// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfixe)
//
// Règles:
// - Précédence : * / = 2 ; + - = 1. Tout est associatif à gauche
//   (on dépile tant que précédence(sommet) >= précédence(entrant)).
// - '(' empile ; ')' dépile jusqu’à '(' puis jette '('.
// - Moins en tête d’expression :
//    - si '-' est le tout premier jeton, on injecte 0 : "-5+3" => "0 5 - 3 +"
//    - partout ailleurs '-' est binaire ("2*-3" et "2*(-3)" restent mal formés).
//
// NOTE:
// - Les parenthèses déséquilibrées sont refusées par la validation ;
//   ici on reste tolérant (')' orpheline ignorée, '(' restante jetée).

use super::jetons::Tok;

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len() + 1);
    let mut ops: Vec<Tok> = Vec::new();

    // Vrai uniquement en tout début : seul endroit où '-' est un signe.
    let mut debut_operande = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                debut_operande = false;
            }

            Tok::LPar => {
                ops.push(tok);
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    out.push(top);
                }
                debut_operande = false;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if debut_operande && matches!(tok, Tok::Minus) {
                    out.push(Tok::Num("0".to_string()));
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                debut_operande = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if !matches!(op, Tok::LPar) {
            out.push(op);
        }
    }

    out
}
