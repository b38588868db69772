// ClipStack - Module storage
// Persistance de l'historique sur disque
//
// La persistance n'est pas du ressort du coeur : seule la suite ordonnee
// des textes est sauvegardee et restauree, jamais le curseur.
//
// # Sous-modules
// - `format` : document JSON versionne (serde_json)
// - `file`   : lecture/ecriture de history.json avec ecriture atomique
//              (temp + rename)

/// Document d'historique JSON.
pub mod format;
/// Lecture/ecriture du fichier d'historique.
pub mod file;

pub use file::{load_history, save_history};
