// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;
use super::format::format_nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Produits par le shunting-yard seulement (jamais par tokenize)
    NegUnaire,
    PlusUnaire,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == ' ' {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : suite maximale de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();

            // "1.2.3" : deux points dans le même littéral
            if lit.matches('.').count() > 1 {
                return Err(ErreurCalcul::NombreInvalide(lit));
            }
            let v = lit
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::NombreInvalide(lit.clone()))?;

            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalcul::CaractereInterdit(c));
    }

    Ok(out)
}

/// Format utilitaire (trace de débogage) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format_nombre(*v),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::NegUnaire => "neg".to_string(),
            Tok::PlusUnaire => "pos".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
