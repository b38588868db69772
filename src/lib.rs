// ClipStack - Arbre de modules (crate library)
//
// Ce fichier constitue le point d'entree de la crate library de ClipStack.
// Il re-exporte tous les modules pour permettre l'acces depuis le binaire
// et faciliter les tests d'integration.
//
// # Modules
// - `app`         : hote console, boucle de commandes sur stdin
// - `clipboard`   : contrat Pasteboard et presse-papiers en memoire
// - `config`      : configuration TOML et source lue a la demande
// - `constants`   : constantes globales (capacite, delais, fichiers)
// - `error`       : types d'erreur centralises (ClipError, ClipResult)
// - `history`     : pile d'historique bornee avec curseur
// - `interaction` : controleur traduisant les actions en mutations
// - `storage`     : persistance JSON de l'historique
// - `system`      : touches et file de taches differees
// - `ui`          : contrats bezel/menu/application et rendus console

/// Hote console de l'application.
pub mod app;
/// Contrat du presse-papiers.
pub mod clipboard;
/// Configuration utilisateur.
pub mod config;
/// Constantes globales de l'application.
pub mod constants;
/// Types d'erreur centralises.
pub mod error;
/// Gestion de l'historique en memoire.
pub mod history;
/// Controleur d'interactions.
pub mod interaction;
/// Persistance de l'historique.
pub mod storage;
/// Touches et taches differees.
pub mod system;
/// Collaborateurs d'affichage.
pub mod ui;

pub use error::{ClipError, ClipResult};
pub use history::{Clipping, ClippingStack};
pub use interaction::{Collaborators, Interactions};
