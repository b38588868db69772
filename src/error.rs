// ClipStack - Types d'erreur centralises
//
// Ce module definit l'enumeration `ClipError` et le type alias
// `ClipResult<T>` utilises aux frontieres faillibles de l'application.
//
// # Categories d'erreurs
// - `Io` : erreur de lecture/ecriture disque (config, historique)
// - `ConfigParse` : fichier de configuration TOML invalide
// - `ConfigWrite` : echec de serialisation de la configuration
// - `Storage` : document d'historique JSON invalide
// - `UnsupportedVersion` : version de format d'historique inconnue
// - `InvalidCommand` : commande de l'hote console non reconnue
//
// Le coeur (pile + interactions) n'a aucun chemin d'erreur : les index
// invalides et les piles vides se degradent en no-op.

use thiserror::Error;

/// Enumeration de toutes les erreurs possibles dans ClipStack.
#[derive(Debug, Error)]
pub enum ClipError {
    /// Erreur de lecture/ecriture disque
    #[error("[Io] {0}")]
    Io(#[from] std::io::Error),
    /// Configuration TOML illisible
    #[error("[Config] {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// Configuration non serialisable
    #[error("[Config] {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    /// Historique JSON illisible
    #[error("[Storage] {0}")]
    Storage(#[from] serde_json::Error),
    /// Version de format d'historique non supportee
    #[error("[Storage] unsupported history version {0}")]
    UnsupportedVersion(u32),
    /// Commande console invalide
    #[error("[Command] {0}")]
    InvalidCommand(String),
}

/// Type Result specialise pour ClipStack.
pub type ClipResult<T> = Result<T, ClipError>;
