//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - editeur.rs    : expression en cours + dernier résultat (machine à états)
//! - intention.rs  : intentions utilisateur (boutons + clavier)
//! - segments.rs   : découpage opérandes / opérateurs de la saisie
//! - format.rs     : f64 <-> texte (Infinity, 1e+21, préfixe flottant)
//! - jetons.rs     : tokenisation pour le calcul
//! - rpn.rs        : shunting-yard + évaluation de la RPN
//! - eval.rs       : pipeline complet (liste blanche -> jetons -> RPN -> f64)
//! - erreur.rs     : erreurs de calcul

pub mod editeur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod intention;
pub mod jetons;
pub mod rpn;
pub mod segments;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use editeur::Editeur;
pub use intention::{Intention, Touche, PAVE};
