// ClipStack - Module config
// Lecture/ecriture de la configuration utilisateur
//
// # Sous-modules
// - `settings` : structure Settings (TOML via serde) avec valeurs par
//                defaut robustes et validation des plages
// - `source`   : trait ConfigSource lu a la demande par le controleur,
//                et SettingsFile qui persiste les changements durables
//
// # Utilisation
// ```rust,ignore
// let mut config = SettingsFile::open(path);
// // Les valeurs manquantes utilisent les defauts
// ```

/// Structure de configuration et valeurs par defaut.
pub mod settings;
/// Source de configuration lue a la demande.
pub mod source;

pub use settings::Settings;
pub use source::{ConfigSource, SettingsFile};
