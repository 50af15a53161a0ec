//! Noyau — évaluation (pipeline réel)
//!
//! valider (liste blanche) -> tokenize -> RPN -> pile f64
//!
//! Aucune exécution de code : l’expression n’est jamais qu’une suite de
//! jetons arithmétiques.

use tracing::debug;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Caractères admis au moment du calcul.
pub fn caractere_admis(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')' | ' ')
}

/// Liste blanche : renvoie le premier caractère interdit.
pub fn valider(expr: &str) -> Result<(), ErreurCalcul> {
    match expr.chars().find(|c| !caractere_admis(*c)) {
        Some(c) => Err(ErreurCalcul::CaractereInterdit(c)),
        None => Ok(()),
    }
}

/// Trace d’une évaluation (jetons + RPN), pour le journal.
#[derive(Default, Clone, Debug)]
pub struct Trace {
    pub jetons: String,
    pub rpn: String,
}

/// Évalue et renvoie aussi la trace.
pub fn eval_detaille(expr_str: &str) -> Result<(f64, Trace), ErreurCalcul> {
    if expr_str.trim().is_empty() {
        return Err(ErreurCalcul::Vide);
    }
    valider(expr_str)?;

    let jetons = tokenize(expr_str)?;
    let rpn = to_rpn(&jetons)?;
    let valeur = eval_rpn(&rpn)?;

    let trace = Trace {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    debug!(jetons = %trace.jetons, rpn = %trace.rpn, valeur, "évaluation");

    Ok((valeur, trace))
}

/// API publique : évalue une expression arithmétique en f64.
///
/// Division par zéro : valeur IEEE (`inf`, `NaN`), pas une erreur.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurCalcul> {
    eval_detaille(expr_str).map(|(v, _)| v)
}
