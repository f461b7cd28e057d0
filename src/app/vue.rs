// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Formulaire de connexion + bouton d'inscription (fenêtre séparée)
// - Écran lecture seule + pavé 4×4
// - Toute la logique vit dans etat.rs : ici on ne fait que câbler les boutons.

use eframe::egui;

use super::etat::{AppCalc, Touche, PAVE};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_connexion(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_calculatrice(ui);
            });

        self.ui_fenetre_inscription(ui.ctx());
    }

    fn ui_connexion(&mut self, ui: &mut egui::Ui) {
        ui.heading("Login Form");

        ui.add(
            egui::TextEdit::singleline(&mut self.identifiant)
                .hint_text("Identifiant")
                .desired_width(ui.available_width()),
        );
        ui.add(
            egui::TextEdit::singleline(&mut self.mot_de_passe)
                .hint_text("Mot de passe")
                .password(true)
                .desired_width(ui.available_width()),
        );

        ui.horizontal(|ui| {
            if ui.button("Login").clicked() {
                self.connexion();
            }
            if ui.button("Register").clicked() {
                self.ouvrir_inscription();
            }
        });

        if !self.statut.is_empty() {
            ui.label(&self.statut);
        }
    }

    fn ui_fenetre_inscription(&mut self, ctx: &egui::Context) {
        if !self.inscription_ouverte {
            return;
        }

        // `open` ne peut pas emprunter self pendant que la fermeture l'utilise.
        let mut ouverte = true;
        egui::Window::new("Register")
            .open(&mut ouverte)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Registration Form");
                ui.add(
                    egui::TextEdit::singleline(&mut self.insc_identifiant).hint_text("Identifiant"),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.insc_mot_de_passe)
                        .hint_text("Mot de passe")
                        .password(true),
                );
                if ui.button("Register").clicked() {
                    self.inscription();
                }
                if !self.insc_erreur.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.insc_erreur);
                }
            });

        if !ouverte {
            self.fermer_inscription();
        }
    }

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        ui.heading("Calculator");

        // Écran : lecture seule, reflète le tampon
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(&self.expression);
            });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if Self::bouton_action(ui, "C", "Efface l'entrée") {
                self.clear_entree();
            }
            if Self::bouton_action(ui, "AC", "Remise à zéro totale") {
                self.reset_total();
            }
            if Self::bouton_action(ui, "DEL", "Efface le dernier caractère") {
                self.backspace();
            }

            ui.separator();

            ui.checkbox(&mut self.options.allow_leading_sign, "Signe en tête (-5+3)");
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for label in ligne {
                        let resp = ui.add_sized([52.0, 40.0], egui::Button::new(label));
                        if resp.clicked() {
                            if let Some(t) = Touche::depuis_label(label) {
                                self.appuyer(t);
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_action(ui: &mut egui::Ui, label: &str, tip: &str) -> bool {
        ui.add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip)
            .clicked()
    }
}
