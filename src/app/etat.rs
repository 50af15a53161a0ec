//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’éditeur du noyau et lui transmettre les intentions,
//! quelle que soit leur source (pavé ou clavier).
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Editeur::appliquer`.
//! - Pas d’état global : l’AppCalc est possédé par la boucle eframe.

use tracing::trace;

use crate::noyau::{Editeur, Intention};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub editeur: Editeur,
}

impl AppCalc {
    /// Applique les intentions dans l’ordre d’arrivée.
    pub fn appliquer_tout(&mut self, intentions: impl IntoIterator<Item = Intention>) {
        for i in intentions {
            let rafraichi = self.editeur.appliquer(i);
            if !rafraichi {
                trace!(intention = ?i, "intention ignorée");
            }
        }
    }

    /// Texte de l’écran.
    pub fn ecran(&self) -> &str {
        self.editeur.affichage()
    }

    pub fn en_erreur(&self) -> bool {
        self.editeur.erreur().is_some()
    }
}
