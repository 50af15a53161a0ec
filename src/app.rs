// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier global : chiffres, + - * /, '.', Enter (=), Backspace (DEL), Escape (C).
// Pas de champ texte : aucune question de focus, le clavier va toujours au noyau.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{Intention, Touche};

/// Touche egui -> touche nommée du noyau.
fn touche_nommee(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Entree),
        egui::Key::Backspace => Some(Touche::Retour),
        egui::Key::Escape => Some(Touche::Echap),
        _ => None,
    }
}

/// Intentions clavier de la frame, dans l’ordre des événements.
///
/// Les caractères viennent de `Event::Text` (indépendant de la disposition),
/// les touches nommées de `Event::Key` : un même appui ne produit qu’une intention.
fn intentions_clavier(ctx: &egui::Context) -> Vec<Intention> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => {
                    out.extend(t.chars().filter_map(Intention::depuis_caractere));
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    if let Some(t) = touche_nommee(*key) {
                        out.push(Intention::depuis_touche(t));
                    }
                }
                _ => {}
            }
        }
        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let clavier = intentions_clavier(ctx);
        self.appliquer_tout(clavier);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
