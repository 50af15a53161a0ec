// src/noyau/format.rs
//
// Conversions nombre <-> texte pour l’affichage.
// - format_nombre       : forme texte canonique d’un f64 (Infinity, NaN, 1e+21…)
// - parse_float_prefixe : lecture du plus long préfixe décimal d’un opérande

/* ------------------------ f64 -> texte ------------------------ */

/// En dessous : notation scientifique.
const SEUIL_BAS: f64 = 1e-6;

/// À partir de : notation scientifique.
const SEUIL_HAUT: f64 = 1e21;

/// Forme texte d’un résultat.
///
/// - décimal le plus court qui relit la même valeur (`0.30000000000000004`)
/// - pas de `.0` final pour les entiers (`4`)
/// - scientifique avec signe d’exposant hors de [1e-6, 1e21[ (`1e+21`, `1.5e-7`)
/// - `Infinity`, `-Infinity`, `NaN`
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        // -0 compris
        return "0".to_string();
    }

    let a = v.abs();
    if (SEUIL_BAS..SEUIL_HAUT).contains(&a) {
        return format!("{v}");
    }

    // "1e21" -> "1e+21"
    let sci = format!("{v:e}");
    match sci.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => sci,
    }
}

/* ------------------------ texte -> f64 ------------------------ */

/// Lit le plus long préfixe de `s` qui forme un nombre décimal.
///
/// Grammaire acceptée : `[+-]? (Infinity | chiffres [. chiffres] [e [+-] chiffres])`,
/// au moins un chiffre dans la mantisse. Le reste du texte est ignoré
/// (`"12abc"` -> 12, `"1e"` -> 1). `None` si aucun préfixe ne convient.
pub fn parse_float_prefixe(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    if t[i..].starts_with("Infinity") {
        let inf = f64::INFINITY;
        return Some(if b[0] == b'-' { -inf } else { inf });
    }

    let debut_chiffres = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut nb_chiffres = i - debut_chiffres;

    if i < b.len() && b[i] == b'.' {
        let apres_point = i + 1;
        let mut j = apres_point;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        nb_chiffres += j - apres_point;
        i = j;
    }

    if nb_chiffres == 0 {
        return None;
    }

    // Exposant : seulement s’il porte au moins un chiffre
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let debut_exp = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exp {
            i = j;
        }
    }

    t[..i].parse::<f64>().ok()
}
