// ClipStack - Lecture/ecriture du fichier d'historique
//
// Sauvegarde et chargement de la pile dans `history.json`.
//
// # Ecriture atomique
// Le document est ecrit dans un fichier temporaire puis renomme, pour
// ne jamais laisser un fichier tronque en cas d'interruption.
//
// # Fichier absent
// Un fichier absent n'est pas une erreur : l'historique demarre vide.

use crate::error::ClipResult;
use crate::history::stack::ClippingStack;
use crate::storage::format;
use std::fs;
use std::path::Path;
use tracing::info;

/// Sauvegarde les textes de la pile et remet son flag `dirty` a zero.
pub fn save_history(path: &Path, stack: &mut ClippingStack) -> ClipResult<()> {
    let data = format::serialize_history(stack.texts())?;

    // Ecriture atomique : temp file + rename
    let tmp_path = path.with_extension("tmp");
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&tmp_path, &data)?;
    fs::rename(&tmp_path, path)?;

    stack.reset_dirty();
    info!(path = %path.display(), count = stack.len(), "history saved");
    Ok(())
}

/// Restaure la pile depuis le fichier (pile vide si absent).
/// Le contenu est tronque a la capacite de la pile.
pub fn load_history(path: &Path, stack: &mut ClippingStack) -> ClipResult<()> {
    if !path.exists() {
        stack.load_from(Vec::new());
        return Ok(());
    }
    let data = fs::read(path)?;
    let clippings = format::deserialize_history(&data)?;
    stack.load_from(clippings);
    info!(path = %path.display(), count = stack.len(), "history loaded");
    Ok(())
}
