//! Éditeur d’expression (machine à états de la saisie).
//!
//! Contrats :
//! - Une seule expression mutable + le dernier résultat.
//! - Chaque opération renvoie `true` si l’affichage est rafraîchi,
//!   `false` si la saisie est ignorée (rien ne change, pas même le marqueur d’erreur).
//! - Le mode erreur ne touche que l’affichage : l’expression est conservée
//!   et la saisie suivante la prolonge.

use tracing::{debug, warn};

use super::erreur::{ErreurCalcul, MARQUEUR_ERREUR};
use super::eval::eval_detaille;
use super::format::{format_nombre, parse_float_prefixe};
use super::intention::Intention;
use super::segments::{decouper, dernier_nombre, est_operateur, recoller, Segment};

#[derive(Clone, Debug, Default)]
pub struct Editeur {
    expression: String,
    dernier_resultat: Option<f64>,
    erreur: Option<ErreurCalcul>,
}

impl Editeur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn dernier_resultat(&self) -> Option<f64> {
        self.dernier_resultat
    }

    /// Dernière erreur de calcul, tant que l’affichage la montre.
    pub fn erreur(&self) -> Option<&ErreurCalcul> {
        self.erreur.as_ref()
    }

    /// Texte à afficher : marqueur d’erreur, "0" si vide, sinon l’expression.
    pub fn affichage(&self) -> &str {
        if self.erreur.is_some() {
            MARQUEUR_ERREUR
        } else if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }

    /// Point d’entrée unique des boutons et du clavier.
    pub fn appliquer(&mut self, intention: Intention) -> bool {
        let rafraichi = match intention {
            Intention::Chiffre(_) | Intention::Operateur(_) | Intention::Point => {
                match intention.caractere() {
                    Some(c) => self.ajouter(c),
                    None => false,
                }
            }
            Intention::Effacer => self.effacer_tout(),
            Intention::Retour => self.retour(),
            Intention::Negation => self.inverser_signe(),
            Intention::Pourcentage => self.pourcentage(),
            Intention::Egal => self.calculer(),
        };
        debug!(?intention, rafraichi, expression = %self.expression, "intention");
        rafraichi
    }

    /* ------------------------ Opérations ------------------------ */

    /// Ajoute un caractère (chiffre, opérateur ou point).
    pub fn ajouter(&mut self, c: char) -> bool {
        if est_operateur(c) {
            // Une expression ne commence que par '-'
            if self.expression.is_empty() && c != '-' {
                return false;
            }
            // Deux opérateurs de suite : le dernier tapé gagne
            if self.expression.ends_with(est_operateur) {
                self.expression.pop();
                self.expression.push(c);
                return self.rafraichir();
            }
        } else if c == '.' {
            let nombre = dernier_nombre(&self.expression);
            if nombre.contains('.') {
                return false;
            }
            if nombre.is_empty() {
                self.expression.push('0');
            }
        } else if !c.is_ascii_digit() {
            return false;
        }

        self.expression.push(c);
        self.rafraichir()
    }

    /// Efface le dernier caractère.
    pub fn retour(&mut self) -> bool {
        self.expression.pop();
        self.rafraichir()
    }

    /// Remise à zéro totale (expression + dernier résultat + erreur).
    pub fn effacer_tout(&mut self) -> bool {
        self.expression.clear();
        self.dernier_resultat = None;
        self.rafraichir()
    }

    /// ± sur le dernier nombre.
    pub fn inverser_signe(&mut self) -> bool {
        let mut segments = decouper(&self.expression);
        let Some(Segment::Operande(dernier)) = segments.last_mut() else {
            // vide, ou se termine par un opérateur
            return false;
        };

        if dernier.starts_with('-') {
            dernier.remove(0);
        } else {
            dernier.insert(0, '-');
        }

        self.expression = recoller(&segments);
        self.rafraichir()
    }

    /// % : divise le dernier nombre par 100.
    pub fn pourcentage(&mut self) -> bool {
        let mut segments = decouper(&self.expression);
        let Some(Segment::Operande(dernier)) = segments.last_mut() else {
            return false;
        };
        let Some(v) = parse_float_prefixe(dernier.as_str()).filter(|v| !v.is_nan()) else {
            return false;
        };

        *dernier = format_nombre(v / 100.0);
        self.expression = recoller(&segments);
        self.rafraichir()
    }

    /// = : valide puis évalue l’expression.
    ///
    /// Succès : l’expression devient le résultat. Échec : mode erreur,
    /// expression et dernier résultat inchangés.
    pub fn calculer(&mut self) -> bool {
        if self.expression.is_empty() {
            return false;
        }

        match eval_detaille(&self.expression) {
            Ok((valeur, _trace)) => {
                self.dernier_resultat = Some(valeur);
                self.expression = format_nombre(valeur);
                self.rafraichir()
            }
            Err(e) => {
                warn!(expression = %self.expression, erreur = %e, "calcul refusé");
                self.erreur = Some(e);
                true
            }
        }
    }

    /// Sortie du mode erreur : l’affichage reflète de nouveau l’expression.
    fn rafraichir(&mut self) -> bool {
        self.erreur = None;
        true
    }
}
