// ClipStack - Constantes globales
//
// Ce module centralise les constantes de l'application :
// - Valeurs par defaut de la configuration
// - Pas de navigation et delai du collage synthetique
// - Format du fichier d'historique
// - Noms de fichiers

use std::time::Duration;

/// Nombre max de clippings par defaut
pub const DEFAULT_MAX_ITEMS: usize = 40;

/// Borne haute de `max_items`
pub const MAX_ITEMS_LIMIT: usize = 1000;

/// Longueur d'apercu par defaut dans le menu (caracteres)
pub const DEFAULT_PREVIEW_LENGTH: usize = 40;

/// Touche de base du raccourci par defaut
pub const DEFAULT_HOTKEY_BASE: &str = "v";

/// Saut de page (PageUp / PageDown)
pub const PAGE_STEP: isize = 10;

/// Delai entre l'ecriture dans le presse-papiers et le collage synthetique
pub const PASTE_DELAY: Duration = Duration::from_millis(200);

/// Version du format du fichier d'historique
pub const HISTORY_FORMAT_VERSION: u32 = 1;

/// Nom du fichier de configuration
pub const CONFIG_FILENAME: &str = "config.toml";

/// Nom du fichier d'historique
pub const HISTORY_FILENAME: &str = "history.json";
