//! Intentions utilisateur.
//!
//! Ensemble fermé d’actions livrées au noyau. Un clic sur un bouton et la
//! touche clavier correspondante produisent la même intention.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intention {
    /// 0..=9
    Chiffre(u8),
    /// + - * /
    Operateur(char),
    Point,
    Effacer,
    Retour,
    Negation,
    Pourcentage,
    Egal,
}

/// Touches nommées reconnues (indépendantes de la bibliothèque d’UI).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Entree,
    Retour,
    Echap,
}

impl Intention {
    /// Caractère tapé -> intention (chiffres, opérateurs, point).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Intention::Chiffre(d as u8)),
            '+' | '-' | '*' | '/' => Some(Intention::Operateur(c)),
            '.' => Some(Intention::Point),
            _ => None,
        }
    }

    pub fn depuis_touche(t: Touche) -> Self {
        match t {
            Touche::Entree => Intention::Egal,
            Touche::Retour => Intention::Retour,
            Touche::Echap => Intention::Effacer,
        }
    }

    /// Libellé du bouton du pavé.
    pub fn libelle(self) -> String {
        match self {
            Intention::Chiffre(d) => d.to_string(),
            Intention::Operateur('*') => "×".to_string(),
            Intention::Operateur('/') => "÷".to_string(),
            Intention::Operateur(c) => c.to_string(),
            Intention::Point => ".".to_string(),
            Intention::Effacer => "C".to_string(),
            Intention::Retour => "DEL".to_string(),
            Intention::Negation => "±".to_string(),
            Intention::Pourcentage => "%".to_string(),
            Intention::Egal => "=".to_string(),
        }
    }

    /// Caractère que l’intention ajoute à l’expression, s’il y en a un.
    pub fn caractere(self) -> Option<char> {
        match self {
            Intention::Chiffre(d) => char::from_digit(u32::from(d), 10),
            Intention::Operateur(c) => Some(c),
            Intention::Point => Some('.'),
            _ => None,
        }
    }
}

/// Pavé : 5 rangées de 4 boutons.
pub const PAVE: [[Intention; 4]; 5] = [
    [
        Intention::Effacer,
        Intention::Retour,
        Intention::Pourcentage,
        Intention::Operateur('/'),
    ],
    [
        Intention::Chiffre(7),
        Intention::Chiffre(8),
        Intention::Chiffre(9),
        Intention::Operateur('*'),
    ],
    [
        Intention::Chiffre(4),
        Intention::Chiffre(5),
        Intention::Chiffre(6),
        Intention::Operateur('-'),
    ],
    [
        Intention::Chiffre(1),
        Intention::Chiffre(2),
        Intention::Chiffre(3),
        Intention::Operateur('+'),
    ],
    [
        Intention::Negation,
        Intention::Chiffre(0),
        Intention::Point,
        Intention::Egal,
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caracteres_reconnus() {
        assert_eq!(Intention::depuis_caractere('7'), Some(Intention::Chiffre(7)));
        assert_eq!(
            Intention::depuis_caractere('/'),
            Some(Intention::Operateur('/'))
        );
        assert_eq!(Intention::depuis_caractere('.'), Some(Intention::Point));
        assert_eq!(Intention::depuis_caractere(','), None);
        assert_eq!(Intention::depuis_caractere('x'), None);
    }

    #[test]
    fn touches_nommees() {
        assert_eq!(Intention::depuis_touche(Touche::Entree), Intention::Egal);
        assert_eq!(Intention::depuis_touche(Touche::Retour), Intention::Retour);
        assert_eq!(Intention::depuis_touche(Touche::Echap), Intention::Effacer);
    }

    #[test]
    fn pave_et_clavier_coincident() {
        // Chaque bouton qui insère un caractère a sa touche clavier
        for rangee in PAVE {
            for i in rangee {
                if let Some(c) = i.caractere() {
                    assert_eq!(Intention::depuis_caractere(c), Some(i), "bouton {i:?}");
                }
            }
        }
    }

    #[test]
    fn libelles_du_pave() {
        let libelles: Vec<String> = PAVE[0].iter().map(|i| i.libelle()).collect();
        assert_eq!(libelles, ["C", "DEL", "%", "÷"]);
    }
}
