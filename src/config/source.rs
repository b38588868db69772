// ClipStack - Source de configuration pour le controleur
//
// Le controleur d'interactions lit ses options au moment de la decision
// (jamais mises en cache) via le trait `ConfigSource`. Cela remplace un
// magasin de preferences global et permet des tests deterministes.
//
// # Implementations
// - `Settings`     : configuration en memoire (tests, hote sans fichier)
// - `SettingsFile` : configuration adossee a un fichier TOML ; les
//                    ecritures durables (ex: "ne plus demander") sont
//                    sauvegardees immediatement

use crate::config::settings::Settings;
use crate::system::keys::Key;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Options lues a la demande par le controleur d'interactions.
pub trait ConfigSource {
    /// Le bezel reste affiche quand le modificateur est relache.
    fn sticky_bezel(&self) -> bool;
    /// Promouvoir un clipping en tete apres utilisation.
    fn move_clippings_after_use(&self) -> bool;
    /// Demander confirmation avant de vider l'historique.
    fn ask_before_clearing(&self) -> bool;
    /// Touche de base du raccourci d'activation.
    fn hotkey_base(&self) -> Option<Key>;
    /// Desactive durablement la confirmation de vidage.
    fn disable_ask_before_clearing(&mut self);
}

impl ConfigSource for Settings {
    fn sticky_bezel(&self) -> bool {
        self.bezel.sticky
    }

    fn move_clippings_after_use(&self) -> bool {
        self.behavior.move_clippings_after_use
    }

    fn ask_before_clearing(&self) -> bool {
        self.behavior.ask_before_clearing
    }

    fn hotkey_base(&self) -> Option<Key> {
        Settings::hotkey_base(self)
    }

    fn disable_ask_before_clearing(&mut self) {
        self.behavior.ask_before_clearing = false;
    }
}

/// Configuration persistee dans un fichier TOML.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    settings: Settings,
    path: PathBuf,
}

impl SettingsFile {
    /// Charge le fichier (defauts s'il est absent ou invalide).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = Settings::load(&path);
        Self { settings, path }
    }

    /// Configuration courante.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Chemin du fichier.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ecrit la configuration courante sur disque.
    /// Un echec est journalise : la valeur en memoire reste appliquee.
    fn persist(&self) {
        match self.settings.save(&self.path) {
            Ok(()) => info!(path = %self.path.display(), "configuration saved"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to save configuration"),
        }
    }
}

impl ConfigSource for SettingsFile {
    fn sticky_bezel(&self) -> bool {
        self.settings.sticky_bezel()
    }

    fn move_clippings_after_use(&self) -> bool {
        self.settings.move_clippings_after_use()
    }

    fn ask_before_clearing(&self) -> bool {
        self.settings.ask_before_clearing()
    }

    fn hotkey_base(&self) -> Option<Key> {
        self.settings.hotkey_base()
    }

    fn disable_ask_before_clearing(&mut self) {
        self.settings.disable_ask_before_clearing();
        self.persist();
    }
}
