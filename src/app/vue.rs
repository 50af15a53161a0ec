// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : expression (ou "0" / "Erreur"), alignée à droite, monospace
// - Pavé 5×4 : chaque bouton porte une Intention du noyau
// - Le clavier est lu dans app.rs, pas ici

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::format::format_nombre;
use crate::noyau::{Intention, PAVE};

/// Taille d’un bouton du pavé.
const TAILLE_BOUTON: [f32; 2] = [72.0, 52.0];

const TAILLE_TEXTE_ECRAN: f32 = 34.0;
const TAILLE_TEXTE_BOUTON: f32 = 22.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        let clics = Self::ui_pave(ui);
        self.appliquer_tout(clics);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.en_erreur() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.ecran())
                            .monospace()
                            .size(TAILLE_TEXTE_ECRAN)
                            .color(couleur),
                    );
                });
            });

        // Mémoire du dernier résultat (indicative)
        if let Some(v) = self.editeur.dernier_resultat() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!("dernier : {}", format_nombre(v)));
            });
        }
    }

    /// Dessine le pavé et renvoie les intentions cliquées pendant cette frame.
    fn ui_pave(ui: &mut egui::Ui) -> Vec<Intention> {
        let mut clics = Vec::new();

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for intention in rangee {
                        if Self::bouton(ui, intention) {
                            clics.push(intention);
                        }
                    }
                    ui.end_row();
                }
            });

        clics
    }

    fn bouton(ui: &mut egui::Ui, intention: Intention) -> bool {
        let texte = egui::RichText::new(intention.libelle()).size(TAILLE_TEXTE_BOUTON);
        let bouton = match intention {
            Intention::Egal => egui::Button::new(texte.strong()).fill(ui.visuals().selection.bg_fill),
            _ => egui::Button::new(texte),
        };
        ui.add_sized(TAILLE_BOUTON, bouton).clicked()
    }
}
