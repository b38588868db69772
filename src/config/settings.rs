// ClipStack - Structure de configuration et valeurs par defaut
//
// Ce module definit la structure `Settings` qui centralise les
// parametres de l'application : historique, bezel, menu, comportement
// apres usage et raccourci.
//
// # Chargement
// `Settings::load(path)` lit le fichier TOML. Fichier absent : valeurs
// par defaut. Fichier invalide : avertissement dans les logs et valeurs
// par defaut. Les valeurs hors bornes sont clampees (`normalized`).
//
// # Format
// ```toml
// [general]
// max_items = 40
//
// [bezel]
// sticky = false
// paste_on_select = false
//
// [menu]
// paste_on_select = false
// preview_length = 40
//
// [behavior]
// move_clippings_after_use = false
// ask_before_clearing = true
//
// [hotkey]
// base_key = "v"
// ```

use crate::constants::*;
use crate::error::ClipResult;
use crate::system::keys::Key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Configuration complete de l'application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralConfig,
    pub bezel: BezelConfig,
    pub menu: MenuConfig,
    pub behavior: BehaviorConfig,
    pub hotkey: HotkeyConfig,
}

/// Parametres de l'historique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Nombre max de clippings conserves
    pub max_items: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { max_items: DEFAULT_MAX_ITEMS }
    }
}

/// Parametres du bezel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BezelConfig {
    /// Le bezel reste affiche au relachement du modificateur
    pub sticky: bool,
    /// Valider une selection colle au lieu de seulement placer
    pub paste_on_select: bool,
}

/// Parametres du menu de la barre d'etat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub paste_on_select: bool,
    pub preview_length: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            paste_on_select: false,
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

/// Comportement apres utilisation et au vidage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub move_clippings_after_use: bool,
    pub ask_before_clearing: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            move_clippings_after_use: false,
            ask_before_clearing: true,
        }
    }
}

/// Raccourci d'activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Touche de base du raccourci ; la re-presser dans le bezel avance
    pub base_key: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self { base_key: DEFAULT_HOTKEY_BASE.to_string() }
    }
}

impl Settings {
    /// Charge la configuration depuis un fichier TOML.
    /// Utilise les defauts si le fichier est absent ou invalide.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Charge la configuration ; `Ok(None)` si le fichier n'existe pas.
    pub fn try_load(path: &Path) -> ClipResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        Ok(Some(Self::parse(&text)?))
    }

    /// Parse un texte TOML et clampe les valeurs hors bornes.
    pub fn parse(text: &str) -> ClipResult<Self> {
        let settings: Settings = toml::from_str(text)?;
        Ok(settings.normalized())
    }

    /// Ramene les valeurs dans leurs bornes.
    pub fn normalized(mut self) -> Self {
        self.general.max_items = self.general.max_items.clamp(1, MAX_ITEMS_LIMIT);
        self.menu.preview_length = self.menu.preview_length.clamp(10, 200);
        self
    }

    /// Sauvegarde la configuration en TOML.
    pub fn save(&self, path: &Path) -> ClipResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialise la configuration en TOML lisible.
    pub fn to_toml(&self) -> ClipResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Touche de base du raccourci, si le nom est reconnu.
    pub fn hotkey_base(&self) -> Option<Key> {
        Key::parse(&self.hotkey.base_key)
    }
}
