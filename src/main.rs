// src/main.rs
//
// Calculatrice + accès — point d'entrée natif
// -------------------------------------------
// - Journal : env_logger (RUST_LOG=info pour voir connexions / erreurs de calcul)
// - Fenêtre : eframe::run_native + NativeOptions
// - `impl eframe::App for AppCalc` vit dans src/app.rs

use eframe::egui;

mod app;
mod comptes;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre principale.
const TITRE_APP: &str = "Login App";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([400.0, 560.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    log::info!("démarrage de {TITRE_APP}");

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
