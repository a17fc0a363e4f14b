//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> validation -> jetons -> RPN -> évaluation décimale -> format
//!
//! `calculer` est la frontière : toute erreur d’étape y devient un
//! `ResultatCalcul` en échec, rien ne remonte au-delà.

use tracing::{debug, warn};

use super::decimal::Decimal;
use super::erreur::ErreurCalcul;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize, Tok};
use super::normalise::{est_blanc, normaliser};
use super::resultat::ResultatCalcul;
use super::rpn::to_rpn;
use super::validation::valider;

/// Nombre de chiffres après la virgule d’un quotient (arrondi half-up).
pub const ECHELLE_DIVISION: u32 = 10;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne le résultat formaté
/// + la démarche (formes intermédiaires).
pub fn evaluer(expr_str: &str) -> Result<(String, DemarcheNoyau), ErreurCalcul> {
    if expr_str.chars().all(est_blanc) {
        return Err(ErreurCalcul::EntreeVide);
    }

    // 1) Normalisation
    let normalisee = normaliser(expr_str);
    debug!(%normalisee, "expression normalisée");

    // 2) Validation
    valider(&normalisee)?;

    // 3) Jetons + RPN
    let jetons = tokenize(&normalisee)?;
    let rpn = to_rpn(&jetons);
    let rpn_txt = format_tokens(&rpn);
    debug!(rpn = %rpn_txt, "postfixe");

    // 4) Évaluation
    let valeur = eval_rpn(&rpn)?;

    // 5) Format
    let resultat = format_resultat(&valeur);

    let d = DemarcheNoyau {
        normalisee,
        jetons: format_tokens(&jetons),
        rpn: rpn_txt,
    };

    Ok((resultat, d))
}

/// Frontière du noyau : ne plante jamais, renvoie toujours un `ResultatCalcul`.
/// `None` = entrée absente (équivaut à une entrée vide).
pub fn calculer(expression: Option<&str>) -> ResultatCalcul {
    match expression {
        Some(s) => calculer_avec_demarche(s).0,
        None => ResultatCalcul::echec(None, ErreurCalcul::EntreeVide.to_string()),
    }
}

/// Comme `calculer`, en une seule passe, avec la démarche en plus.
/// Démarche vide si le calcul échoue.
pub fn calculer_avec_demarche(s: &str) -> (ResultatCalcul, DemarcheNoyau) {
    match evaluer(s) {
        Ok((resultat, d)) => (ResultatCalcul::succes(Some(s), resultat), d),
        Err(e) => {
            if let ErreurCalcul::Inattendue(detail) = &e {
                warn!(expression = %s, %detail, "erreur inattendue pendant le calcul");
            } else {
                debug!(expression = %s, erreur = %e, "calcul refusé");
            }
            (
                ResultatCalcul::echec(Some(s), e.to_string()),
                DemarcheNoyau::default(),
            )
        }
    }
}

/// Évalue une suite postfixe.
///
/// - Num   : lu en décimal exact (échec de lecture => Inattendue)
/// - op    : b = sommet, a = suivant, on empile a op b
/// - fin   : exactement une valeur sur la pile
pub fn eval_rpn(rpn: &[Tok]) -> Result<Decimal, ErreurCalcul> {
    let mut pile: Vec<Decimal> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(texte) => {
                let x = texte
                    .parse::<Decimal>()
                    .map_err(|e| ErreurCalcul::Inattendue(e.to_string()))?;
                pile.push(x);
            }

            op if op.est_operateur() => {
                if pile.len() < 2 {
                    return Err(ErreurCalcul::OperandesInsuffisantes);
                }
                let b = pile.pop().ok_or(ErreurCalcul::OperandesInsuffisantes)?;
                let a = pile.pop().ok_or(ErreurCalcul::OperandesInsuffisantes)?;
                pile.push(appliquer(op, &a, &b)?);
            }

            _ => {
                return Err(ErreurCalcul::Inattendue(
                    "parenthèse inattendue en RPN".into(),
                ));
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurCalcul::ResultatInvalide);
    }
    pile.pop().ok_or(ErreurCalcul::ResultatInvalide)
}

fn appliquer(op: &Tok, a: &Decimal, b: &Decimal) -> Result<Decimal, ErreurCalcul> {
    match op {
        Tok::Plus => Ok(a.add(b)),
        Tok::Minus => Ok(a.sub(b)),
        Tok::Star => Ok(a.mul(b)),
        Tok::Slash => a
            .div(b, ECHELLE_DIVISION)
            .ok_or(ErreurCalcul::DivisionParZero),
        _ => Err(ErreurCalcul::Inattendue(format!(
            "opérateur non supporté: {op:?}"
        ))),
    }
}
