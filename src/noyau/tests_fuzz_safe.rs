//! Tests fuzz safe : robustesse + déterminisme + cohérence arithmétique.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - entrées générées par proptest (tailles bornées, réduction automatique)
//! - invariant clé : exactement un de {resultat, message_erreur} est présent
//! - "a op b" doit coïncider avec un calcul entier i128 mené à part
//!   (mise à l’échelle, arrondi half-up, écriture du texte attendu)

use num_bigint::BigInt;
use proptest::prelude::*;

use super::calculer;
use super::decimal::Decimal;
use super::format::format_resultat;
use super::ECHELLE_DIVISION;

/* ------------------------ Générateurs ------------------------ */

/// Numéral positif : mantisse + nombre de décimales.
fn numeral() -> impl Strategy<Value = (u32, u32)> {
    (0u32..1_000_000, 0u32..5)
}

fn numeral_txt((m, e): (u32, u32)) -> String {
    ecrire(i128::from(m), e)
}

/// m * 10^-e en écriture simple, sans toucher aux zéros finaux.
fn ecrire(m: i128, e: u32) -> String {
    let e = e as usize;
    let chiffres = format!("{:0>largeur$}", m.unsigned_abs(), largeur = e + 1);
    let (entier, fraction) = chiffres.split_at(chiffres.len() - e);
    let signe = if m < 0 { "-" } else { "" };
    if e == 0 {
        format!("{signe}{entier}")
    } else {
        format!("{signe}{entier}.{fraction}")
    }
}

/// Texte affiché pour m * 10^-e : zéros finaux retirés, entier sans point.
fn texte_attendu(mut m: i128, mut e: u32) -> String {
    while e > 0 && m % 10 == 0 {
        m /= 10;
        e -= 1;
    }
    ecrire(m, e)
}

/// "a op b" en entiers : (mantisse, échelle), `None` pour une division par zéro.
fn arithmetique_entiere((ma, ea): (u32, u32), op: char, (mb, eb): (u32, u32)) -> Option<(i128, u32)> {
    let (ma, mb) = (i128::from(ma), i128::from(mb));
    let p = |n: u32| 10i128.pow(n);
    let e = ea.max(eb);
    match op {
        '+' => Some((ma * p(e - ea) + mb * p(e - eb), e)),
        '-' => Some((ma * p(e - ea) - mb * p(e - eb), e)),
        '*' => Some((ma * mb, ea + eb)),
        _ => {
            if mb == 0 {
                return None;
            }
            // a / b à 10 décimales : round(ma * 10^(eb+10) / (mb * 10^ea)), half-up
            let n = ma * p(eb + ECHELLE_DIVISION);
            let d = mb * p(ea);
            Some(((2 * n + d) / (2 * d), ECHELLE_DIVISION))
        }
    }
}

fn operateur() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

/// Expression bien formée : opérandes positifs, opérateurs binaires, parenthèses.
fn expression_bien_formee() -> impl Strategy<Value = String> {
    let feuille = numeral().prop_map(numeral_txt);
    feuille.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), operateur(), inner.clone()).prop_map(|(a, op, b)| format!("{a} {op} {b}")),
            inner.prop_map(|a| format!("({a})")),
        ]
    })
}

fn est_erreur_attendue(msg: &str) -> bool {
    // seule erreur "normale" sur une expression bien formée
    msg.contains("division by zero")
}

#[test]
fn oracle_entier_sur_cas_connus() {
    assert_eq!(texte_attendu(-300, 2), "-3");
    assert_eq!(texte_attendu(3333333333, 10), "0.3333333333");
    assert_eq!(texte_attendu(0, 4), "0");
    assert_eq!(ecrire(5, 3), "0.005");
    assert_eq!(arithmetique_entiere((2, 0), '/', (3, 0)), Some((6666666667, 10)));
    assert_eq!(arithmetique_entiere((15, 1), '-', (3, 0)), Some((-15, 1)));
    assert_eq!(arithmetique_entiere((1, 0), '/', (0, 2)), None);
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn fuzz_jamais_de_panique_et_contrat_tenu(s in "[0-9+*/.() -]{0,24}") {
        let r = calculer(Some(&s));
        prop_assert_eq!(r.expression(), Some(s.as_str()));
        prop_assert_eq!(r.est_succes(), r.resultat().is_some());
        prop_assert_eq!(r.est_succes(), r.message_erreur().is_none());
    }

    #[test]
    fn fuzz_deterministe(s in "[0-9+*/.() -]{0,24}") {
        prop_assert_eq!(calculer(Some(&s)), calculer(Some(&s)));
    }

    #[test]
    fn fuzz_bien_formee_termine(expr in expression_bien_formee()) {
        let r = calculer(Some(&expr));
        match r.resultat() {
            Some(txt) => {
                let lu = txt.trim_start_matches('-').parse::<Decimal>();
                prop_assert!(lu.is_ok(), "résultat illisible {:?} pour {:?}", txt, expr);
            }
            None => {
                let msg = r.message_erreur().unwrap_or_default();
                prop_assert!(est_erreur_attendue(msg), "expr={:?} err={:?}", expr, msg);
            }
        }
    }

    #[test]
    fn fuzz_binaire_egale_arithmetique_entiere(a in numeral(), op in operateur(), b in numeral()) {
        let expr = format!("{} {op} {}", numeral_txt(a), numeral_txt(b));
        let r = calculer(Some(&expr));

        match arithmetique_entiere(a, op, b) {
            Some((m, e)) => {
                let attendu = texte_attendu(m, e);
                prop_assert_eq!(r.resultat(), Some(attendu.as_str()), "expr={:?}", expr);
            }
            None => {
                prop_assert_eq!(
                    r.message_erreur(),
                    Some("Calculation error: division by zero"),
                    "expr={:?}", expr
                );
            }
        }
    }

    #[test]
    fn fuzz_format_entier_sans_point(m in any::<i64>(), e in 0u32..6) {
        // m * 10^e / 10^e : valeur entière, échelle non nulle
        let x = Decimal::from_parts(BigInt::from(m) * BigInt::from(10).pow(e), e);
        let txt = format_resultat(&x);
        prop_assert!(!txt.contains('.'));
        prop_assert_eq!(txt, m.to_string());
    }
}
