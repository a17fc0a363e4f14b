// src/api.rs
//
// Surface JSON : { "expression": string } -> ResultatCalcul sérialisé.
//
// Contrôle de forme côté appelant (avant le noyau) :
// - non blanc
// - caractères dans [0-9 + - * / . ( )] ou blancs ASCII
//
// Le noyau revalide de toute façon : ce contrôle ne fait que refuser plus tôt
// (l’équivalent d’un 400 côté HTTP), sans toucher à l’historique.

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::normalise::est_blanc;
use crate::noyau::{calculer, ResultatCalcul};

/// Refus de forme d’une requête.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurRequete {
    #[error("Please enter an expression")]
    Vide,

    #[error("Please enter a valid expression")]
    CaracteresInvalides,
}

/// Erreurs de la surface JSON.
#[derive(Error, Debug)]
pub enum ErreurApi {
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Requete(#[from] ErreurRequete),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RequeteCalcul {
    #[serde(default)]
    pub expression: Option<String>,
}

fn est_caractere_de_saisie(c: char) -> bool {
    c.is_ascii_digit() || est_blanc(c) || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')')
}

impl RequeteCalcul {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: Some(expression.into()),
        }
    }

    /// Contrôle de forme ; renvoie l’expression acceptée.
    pub fn valider(&self) -> Result<&str, ErreurRequete> {
        let s = match self.expression.as_deref() {
            Some(s) if !s.chars().all(est_blanc) => s,
            _ => return Err(ErreurRequete::Vide),
        };
        if !s.chars().all(est_caractere_de_saisie) {
            return Err(ErreurRequete::CaracteresInvalides);
        }
        Ok(s)
    }
}

/// Valide la requête puis appelle le noyau.
pub fn calculer_requete(requete: &RequeteCalcul) -> Result<ResultatCalcul, ErreurRequete> {
    let s = requete.valider()?;
    Ok(calculer(Some(s)))
}

/// Corps JSON en entrée, corps JSON en sortie.
pub fn traiter_json(corps: &str) -> Result<String, ErreurApi> {
    let requete: RequeteCalcul = serde_json::from_str(corps)?;
    let resultat = calculer_requete(&requete).map_err(|e| {
        tracing::debug!(erreur = %e, "requête refusée");
        e
    })?;
    Ok(serde_json::to_string(&resultat)?)
}
