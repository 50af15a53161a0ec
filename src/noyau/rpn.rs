// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix) en vérifiant la grammaire
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - '-' ou '+' là où on attend une valeur => opérateur unaire (NegUnaire / PlusUnaire)
// - unaires : préfixes, plus prioritaires que * et /
// - * et / avant + et -, associativité à gauche
// - division par zéro : sémantique IEEE (inf / NaN), pas une erreur

use super::erreur::ErreurCalcul;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::NegUnaire | Tok::PlusUnaire => 3,
        _ => 0,
    }
}

/// Dépile vers la sortie tout ce qui doit passer avant l’opérateur binaire `tok`.
fn depile_pour(tok: &Tok, ops: &mut Vec<Tok>, out: &mut Vec<Tok>) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) || precedence(top) < precedence(tok) {
            break;
        }
        if let Some(op) = ops.pop() {
            out.push(op);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, LPar, Minus, Num(3), RPar]
///   rpn:    [Num(2), Num(3), NegUnaire, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(ErreurCalcul::Vide);
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // true tant qu’une valeur (nombre, '(' ou unaire) est attendue
    let mut attend_valeur = true;
    let mut precedent: Option<&Tok> = None;

    for tok in tokens {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurCalcul::OperateurManquant);
                }
                out.push(tok.clone());
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurCalcul::OperateurManquant);
                }
                ops.push(Tok::LPar);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(match precedent {
                        Some(Tok::LPar) => ErreurCalcul::GroupeVide,
                        _ => ErreurCalcul::OperandeManquant,
                    });
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurCalcul::ParentheseInattendue);
                }
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                // unaire : préfixe, ne dépile rien
                ops.push(if matches!(tok, Tok::Minus) {
                    Tok::NegUnaire
                } else {
                    Tok::PlusUnaire
                });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurCalcul::OperandeManquant);
                }
                depile_pour(tok, &mut ops, &mut out);
                ops.push(tok.clone());
                attend_valeur = true;
            }

            Tok::NegUnaire | Tok::PlusUnaire => ops.push(tok.clone()),
        }
        precedent = Some(tok);
    }

    if attend_valeur {
        return Err(ErreurCalcul::OperandeManquant);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN produite par `to_rpn`.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::NegUnaire | Tok::PlusUnaire => {
                let x = st.pop().ok_or(ErreurCalcul::OperandeManquant)?;
                st.push(if matches!(tok, Tok::NegUnaire) { -x } else { x });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurCalcul::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurCalcul::OperandeManquant)?;
                st.push(match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                });
            }

            Tok::LPar => return Err(ErreurCalcul::ParentheseNonFermee),
            Tok::RPar => return Err(ErreurCalcul::ParentheseInattendue),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        (None, _) => Err(ErreurCalcul::Vide),
        (Some(_), false) => Err(ErreurCalcul::OperateurManquant),
    }
}
