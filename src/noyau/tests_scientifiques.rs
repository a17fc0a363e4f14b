//! Tests scientifiques (campagne) : cas de référence + parité de comportement.
//!
//! But : figer le contrat de `calculer` tel qu’un appelant le voit.
//! - succès : résultat formaté exact
//! - échec  : message de la taxonomie, jamais de résultat
//!
//! Notes :
//! - Les suites de 3 signes ou plus ne sont que partiellement réduites par la
//!   normalisation ; les cas ci-dessous figent le comportement actuel.
//! - "2 * -3" et "2 * (-3)" sont refusés (opérandes insuffisantes) : le moins
//!   n’est un signe qu’en tout début d’expression.

use pretty_assertions::assert_eq;

use super::calculer;

fn assert_ok(expr: &str, attendu: &str) {
    let r = calculer(Some(expr));
    assert!(
        r.est_succes(),
        "expr={expr:?} err={:?}",
        r.message_erreur()
    );
    assert_eq!(r.resultat(), Some(attendu), "expr={expr:?}");
    assert_eq!(r.message_erreur(), None, "expr={expr:?}");
}

fn assert_ko(expr: Option<&str>, fragment: &str) {
    let r = calculer(expr);
    assert!(!r.est_succes(), "expr={expr:?} devrait échouer");
    assert_eq!(r.resultat(), None, "expr={expr:?}");
    let msg = r
        .message_erreur()
        .unwrap_or_else(|| panic!("message attendu pour {expr:?}"));
    assert!(
        msg.contains(fragment),
        "expr={expr:?} : attendu que {msg:?} contienne {fragment:?}"
    );
}

/* ------------------------ Arithmétique de base ------------------------ */

#[test]
fn sci_quatre_operations() {
    assert_ok("2 + 3", "5");
    assert_ok("5 - 3", "2");
    assert_ok("4 * 3", "12");
    assert_ok("10 / 2", "5");
}

#[test]
fn sci_precedence_et_parentheses() {
    assert_ok("2 + 3 * 4", "14");
    assert_ok("(2 + 3) * 4", "20");
    assert_ok("10 / 2 + 3", "8");
    assert_ok("2 * (3 + 4)", "14");
    assert_ok("((2))", "2");
    assert_ok("2 * ((3 + 1) * (4 - 2))", "16");
}

#[test]
fn sci_associativite_gauche() {
    assert_ok("10 - 4 - 3", "3");
    assert_ok("100 / 10 / 5", "2");
    assert_ok("8 / 4 * 2", "4");
}

#[test]
fn sci_tableau_de_parite() {
    let cas = [
        ("1 + 1", "2"),
        ("10 - 5", "5"),
        ("3 * 4", "12"),
        ("15 / 3", "5"),
        ("2 + 3 * 4", "14"),
        ("(2 + 3) * 4", "20"),
        ("10 / 2 + 3", "8"),
        ("2 * (3 + 4)", "14"),
    ];
    for (expr, attendu) in cas {
        assert_ok(expr, attendu);
    }
}

/* ------------------------ Décimaux ------------------------ */

#[test]
fn sci_decimaux_exacts() {
    assert_ok("3.5 + 2.5", "6");
    assert_ok("0.1 + 0.2", "0.3");
    assert_ok("0.1 * 0.2", "0.02");
    assert_ok("1.50 * 2", "3");
    assert_ok(".5 + 5.", "5.5");
}

#[test]
fn sci_precision_division() {
    let r = calculer(Some("1 / 3"));
    let txt = r.resultat().unwrap_or_else(|| panic!("1/3 devrait réussir"));
    assert!(txt.len() > 3);
    assert!(txt.starts_with("0.333"));
    assert_eq!(txt, "0.3333333333");

    assert_ok("2 / 3", "0.6666666667");
    assert_ok("1 / 8", "0.125");
    assert_ok("1 / 3 * 3", "0.9999999999");
}

#[test]
fn sci_grands_et_negatifs() {
    assert_ok("999999 + 1", "1000000");
    assert_ok("5 - 8", "-3");
    assert_ok("123456789012345678901234567890 * 10", "1234567890123456789012345678900");
    assert_ok("0 - 0.5", "-0.5");
}

/* ------------------------ Signes ------------------------ */

#[test]
fn sci_signes_redondants() {
    assert_ok("5 - -3", "8");
    assert_ok("5 + +3", "8");
    assert_ok("2 + + 3", "5");
    assert_ok("5 + -3", "2");
    assert_ok("5 - +3", "2");
    assert_ok("-5 + 3", "-2");
    assert_ok("-(2 + 3)", "-5");
}

#[test]
fn sci_moins_apres_parenthese() {
    // seul un '-' en tout début est un signe
    assert_ko(Some("4 * (-2)"), "insufficient operands");
    assert_ko(Some("2 * (-3)"), "insufficient operands");
}

#[test]
fn sci_suites_de_signes_heritees() {
    // "2+--+3" => "2+++3" : refusé
    assert_ko(Some("2 + - - + 3"), "Invalid expression");
    // "2----3" => "2++3" : refusé
    assert_ko(Some("2 - - - - 3"), "Invalid expression");
    // "2---3" => "2+-3" (passe "--") => "2-3" (passe "+-") : accepté
    assert_ok("2 - - - 3", "-1");
}

/* ------------------------ Échecs ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_ko(Some("5 / 0"), "division by zero");
    assert_ko(Some("1 / (3 - 3)"), "division by zero");
    assert_ko(Some("1 / 0.000"), "division by zero");
}

#[test]
fn sci_entree_vide() {
    assert_ko(Some(""), "No expression");
    assert_ko(Some("   \t "), "No expression");
    assert_ko(None, "No expression");
}

#[test]
fn sci_blancs_unicode_refuses() {
    // seuls les blancs ASCII sont retirés
    assert_ko(Some("1\u{A0}+ 2"), "Invalid expression");
    assert_ko(Some("\u{A0}"), "Invalid expression");
    assert_ko(Some("2\u{2003}*\u{2003}3"), "Invalid expression");
    assert_ok("1\x0B+\x0C2", "3");
}

#[test]
fn sci_expressions_invalides() {
    assert_ko(Some("(2 + 3"), "Invalid expression");
    for expr in ["abc", "2 + abc", "2 @ 3", "2 +", "+ 2", "2 + * 3", "2 * * 3", "2 + 3 +", "* 2"] {
        assert_ko(Some(expr), "Invalid expression");
    }
}

#[test]
fn sci_expressions_malformees() {
    assert_ko(Some("2 * -3"), "insufficient operands");
    assert_ko(Some("()"), "invalid result");
    assert_ko(Some("2 (3)"), "invalid result");
}

#[test]
fn sci_numeral_douteux() {
    assert_ko(Some("2..3"), "unexpected error");
    assert_ko(Some("1.2.3 + 1"), "unexpected error");
}

/* ------------------------ Contrat de sortie ------------------------ */

#[test]
fn sci_expression_renvoyee_telle_quelle() {
    for expr in ["  2+3 ", "5 - -3", "(2 + 3", "5 / 0", ""] {
        let r = calculer(Some(expr));
        assert_eq!(r.expression(), Some(expr));
    }
    assert_eq!(calculer(None).expression(), None);
}
