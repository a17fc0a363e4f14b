//! Calculatrice décimale
//!
//! - noyau : évaluation exacte (+ - * /, parenthèses, décimaux à virgule fixe)
//! - api   : surface JSON { "expression" } -> ResultatCalcul
//! - app   : état + vue egui (historique des 10 derniers calculs)

pub mod api;
pub mod app;
pub mod noyau;

pub use noyau::{calculer, ErreurCalcul, ResultatCalcul};
