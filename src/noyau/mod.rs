//! Noyau décimal exact
//!
//! Organisation interne :
//! - normalise.rs  : espaces + réduction des paires de signes
//! - validation.rs : caractères, parenthèses, positions d’opérateurs
//! - jetons.rs     : tokenisation (numéraux bruts, opérateurs, parenthèses)
//! - rpn.rs        : shunting-yard (infixe -> postfixe)
//! - decimal.rs    : décimal à virgule fixe (mantisse BigInt)
//! - format.rs     : affichage du résultat
//! - resultat.rs   : ResultatCalcul (sortie du noyau, forme JSON)
//! - erreur.rs     : taxonomie des erreurs
//! - eval.rs       : pipeline complet + frontière `calculer`
//!
//! Aucun état partagé : chaque appel ne touche que ses propres piles.

pub mod decimal;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod resultat;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{calculer, calculer_avec_demarche, evaluer, DemarcheNoyau, ECHELLE_DIVISION};
pub use resultat::ResultatCalcul;
