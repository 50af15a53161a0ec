//! Découpage de l’expression en cours de saisie.
//!
//! Suite alternée d’opérandes et d’opérateurs, dont la concaténation
//! redonne exactement l’expression. Sert à `±`, `%` et à la règle du point.
//!
//! Règles :
//! - `-` en position d’opérande (début, ou juste après un opérateur) et suivi
//!   d’autre chose qu’un opérateur : c’est un signe, il reste dans l’opérande.
//! - `+`/`-` juste après l’exposant d’un nombre (`1e+21`) reste dans l’opérande.

/// Caractères opérateurs de la saisie.
pub const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

pub fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Operande(String),
    Operateur(char),
}

impl Segment {
    fn pousser_dans(&self, out: &mut String) {
        match self {
            Segment::Operande(s) => out.push_str(s),
            Segment::Operateur(c) => out.push(*c),
        }
    }
}

/// `true` si le `+`/`-` qui suit `operande` est le signe d’un exposant.
fn suit_exposant(operande: &str) -> bool {
    let mut rev = operande.chars().rev();
    matches!(rev.next(), Some('e' | 'E')) && rev.next().is_some_and(|c| c.is_ascii_digit())
}

pub fn decouper(expr: &str) -> Vec<Segment> {
    let chars: Vec<char> = expr.chars().collect();
    let mut out: Vec<Segment> = Vec::new();
    let mut courant = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !est_operateur(c) {
            courant.push(c);
            continue;
        }

        if !courant.is_empty() {
            if (c == '+' || c == '-') && suit_exposant(&courant) {
                courant.push(c);
                continue;
            }
            out.push(Segment::Operande(std::mem::take(&mut courant)));
            out.push(Segment::Operateur(c));
            continue;
        }

        // Pas d’opérande en cours : on attend une valeur
        let attend_operande = matches!(out.last(), None | Some(Segment::Operateur(_)));
        let suivi_valeur = chars.get(i + 1).is_some_and(|n| !est_operateur(*n));
        if c == '-' && attend_operande && suivi_valeur {
            courant.push(c);
        } else {
            out.push(Segment::Operateur(c));
        }
    }

    if !courant.is_empty() {
        out.push(Segment::Operande(courant));
    }
    out
}

pub fn recoller(segments: &[Segment]) -> String {
    let mut out = String::new();
    for s in segments {
        s.pousser_dans(&mut out);
    }
    out
}

/// Partie numérique du dernier opérande (sans signe), vide si l’expression
/// est vide ou se termine par un opérateur.
pub fn dernier_nombre(expr: &str) -> String {
    match decouper(expr).pop() {
        Some(Segment::Operande(s)) => s.trim_start_matches('-').to_string(),
        _ => String::new(),
    }
}
