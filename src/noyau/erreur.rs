// src/noyau/erreur.rs

use thiserror::Error;

/// Marqueur affiché quand le dernier calcul a échoué.
pub const MARQUEUR_ERREUR: &str = "Erreur";

/// Échec d’un calcul (validation ou évaluation).
///
/// Aucune de ces erreurs n’est fatale : l’éditeur passe en mode erreur
/// et la saisie suivante reprend sur l’expression conservée.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("entrée vide")]
    Vide,

    #[error("caractère interdit: '{0}'")]
    CaractereInterdit(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("opérateur manquant entre deux valeurs")]
    OperateurManquant,

    #[error("parenthèse non fermée")]
    ParentheseNonFermee,

    #[error("parenthèse fermante inattendue")]
    ParentheseInattendue,

    #[error("groupe de parenthèses vide")]
    GroupeVide,
}
