// src/noyau/format.rs

use super::decimal::Decimal;

/// Affichage du résultat final :
/// - valeur entière  => entier simple, sans point ("6", pas "6.0")
/// - sinon           => zéros finaux retirés, écriture simple ("0.3333333333")
pub fn format_resultat(x: &Decimal) -> String {
    let propre = x.sans_zeros_finaux();
    if propre.est_entier() {
        return propre.mantisse().to_str_radix(10);
    }
    propre.to_plain_string()
}
