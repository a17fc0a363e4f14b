//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, dernier résultat,
//! refus de saisie, historique) et offrir des opérations simples
//! (C / CLR historique / AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : contrôle de forme de `api::RequeteCalcul`, puis
//!   un seul passage dans le noyau (`calculer_avec_demarche`).
//! - Une saisie refusée (forme) ne touche pas l’historique mais efface le
//!   dernier résultat et la démarche : rien de périmé ne reste affiché.
//! - Historique : plus récent en tête, borné à HISTORIQUE_MAX.

use std::collections::VecDeque;

use tracing::info;

use crate::api::RequeteCalcul;
use crate::noyau::{calculer_avec_demarche, DemarcheNoyau, ResultatCalcul};

/// Nombre maximal de résultats gardés dans l’historique.
pub const HISTORIQUE_MAX: usize = 10;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub dernier: Option<ResultatCalcul>,
    pub refus_saisie: String, // contrôle de forme (vide / caractères)
    pub demarche: DemarcheNoyau,

    // --- historique (plus récent en tête) ---
    pub historique: VecDeque<ResultatCalcul>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            dernier: None,
            refus_saisie: String::new(),
            demarche: DemarcheNoyau::default(),
            historique: VecDeque::with_capacity(HISTORIQUE_MAX),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultat + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_historique();
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Effacer l’historique (et le résultat affiché, comme une page neuve).
    pub fn clear_historique(&mut self) {
        self.historique.clear();
        self.dernier = None;
        self.refus_saisie.clear();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// "=" : contrôle de forme, puis calcul + historique.
    pub fn soumettre(&mut self) {
        self.focus_entree = true;

        let requete = RequeteCalcul::new(self.entree.clone());
        let (resultat, demarche) = match requete.valider() {
            Ok(s) => calculer_avec_demarche(s),
            Err(e) => {
                self.refus_saisie = e.to_string();
                self.dernier = None;
                self.demarche = DemarcheNoyau::default();
                return;
            }
        };
        self.refus_saisie.clear();
        // vide si le calcul a échoué
        self.demarche = demarche;

        info!(
            expression = %self.entree,
            succes = resultat.est_succes(),
            "calcul soumis"
        );

        self.pousser_historique(resultat.clone());
        self.dernier = Some(resultat);
    }

    fn pousser_historique(&mut self, r: ResultatCalcul) {
        self.historique.push_front(r);
        self.historique.truncate(HISTORIQUE_MAX);
    }
}
