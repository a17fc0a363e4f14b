// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Chaque variante porte un message FIXE : c’est ce texte qui part dans
// `errorMessage` côté appelant (jamais de détail interne).

use thiserror::Error;

/// Erreurs possibles du pipeline normalise -> validation -> RPN -> éval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Entrée absente ou blanche.
    #[error("No expression was entered")]
    EntreeVide,

    /// Jeu de caractères, parenthèses ou position d’opérateur refusés.
    #[error("Invalid expression")]
    ExpressionInvalide,

    /// Diviseur exactement nul.
    #[error("Calculation error: division by zero")]
    DivisionParZero,

    /// Postfixe mal formé : opérateur sans deux opérandes.
    #[error("Calculation error: insufficient operands for operator")]
    OperandesInsuffisantes,

    /// Postfixe mal formé : la pile ne finit pas avec exactement une valeur.
    #[error("Calculation error: invalid result")]
    ResultatInvalide,

    /// Tout le reste (ex: numéral "2..3" arrivé jusqu’au parseur décimal).
    /// Le détail est journalisé, pas affiché.
    #[error("An unexpected error occurred")]
    Inattendue(String),
}
