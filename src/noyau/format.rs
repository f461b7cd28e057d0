// src/noyau/format.rs
//
// Affichage d’un résultat pour l’écran de la calculatrice.
// Appelé par l’UI (jamais par evaluate).

/// Décimal le plus court qui relit la même valeur f64.
/// - pas de zéros de remplissage ("2.5", pas "2.500000")
/// - pas de notation exposant ("1e21" s’affiche en toutes lettres)
/// - "-0" devient "0"
pub fn format_resultat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
