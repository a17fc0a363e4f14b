// src/noyau/resultat.rs
//
// Sortie du noyau (seule valeur qui traverse sa frontière).
//
// Contrat :
// - succes == true  <=> resultat présent ET message_erreur absent
// - `expression` renvoie TOUJOURS l’entrée brute de l’appelant (jamais la normalisée)
// - immuable après construction (champs privés, pas de setters)

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultatCalcul {
    expression: Option<String>,
    #[serde(rename = "result")]
    resultat: Option<String>,
    #[serde(rename = "success")]
    succes: bool,
    #[serde(rename = "errorMessage")]
    message_erreur: Option<String>,
}

impl ResultatCalcul {
    pub fn succes(expression: Option<&str>, resultat: impl Into<String>) -> Self {
        Self {
            expression: expression.map(str::to_owned),
            resultat: Some(resultat.into()),
            succes: true,
            message_erreur: None,
        }
    }

    pub fn echec(expression: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            expression: expression.map(str::to_owned),
            resultat: None,
            succes: false,
            message_erreur: Some(message.into()),
        }
    }

    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    pub fn resultat(&self) -> Option<&str> {
        self.resultat.as_deref()
    }

    pub fn est_succes(&self) -> bool {
        self.succes
    }

    pub fn message_erreur(&self) -> Option<&str> {
        self.message_erreur.as_deref()
    }
}
