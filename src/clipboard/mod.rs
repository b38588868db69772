// ClipStack - Module clipboard
// Contrat avec le presse-papiers systeme
//
// Le coeur ne parle jamais directement au presse-papiers : il passe par
// le trait `Pasteboard`, implemente par l'hote. La negociation de formats
// et la scrutation du presse-papiers restent hors du coeur.
//
// # Sous-modules
// - `memory` : presse-papiers en memoire, utilise par l'hote console et
//              par les tests
//
// # Ecritures "autogenerees"
// Quand le coeur vide le presse-papiers lors d'un "clear all", l'ecriture
// est marquee autogeneree pour que la scrutation ne l'enregistre pas
// comme une copie de l'utilisateur.

/// Presse-papiers en memoire.
pub mod memory;

pub use memory::MemoryPasteboard;

/// Presse-papiers vu par le controleur d'interactions.
pub trait Pasteboard {
    /// Ecrit un texte en tete du presse-papiers (copie utilisateur).
    fn set(&mut self, text: &str);
    /// Ecrit un texte marque comme autogenere (ex: vidage).
    fn set_autogenerated(&mut self, text: &str);
    /// Texte actuellement en tete, s'il y en a un.
    fn top_item(&self) -> Option<String>;
    /// Emet la frappe "coller" synthetique vers l'application au premier plan.
    fn emit_paste_keystroke(&mut self);
}
