// ClipStack - Document d'historique JSON
//
// L'historique persiste se reduit a la suite ordonnee des textes (plus
// recent en premier) : ni curseur, ni metadonnees.
//
// # Format
// ```json
// { "version": 1, "clippings": ["plus recent", "...", "plus ancien"] }
// ```
//
// # Robustesse
// Une version inconnue est refusee (`UnsupportedVersion`) plutot que
// d'etre interpretee approximativement.

use crate::constants::HISTORY_FORMAT_VERSION;
use crate::error::{ClipError, ClipResult};
use crate::history::clipping::Clipping;
use serde::{Deserialize, Serialize};

/// Document serialise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDocument {
    pub version: u32,
    pub clippings: Vec<String>,
}

impl HistoryDocument {
    /// Construit le document a partir des textes ordonnes.
    pub fn new(clippings: Vec<String>) -> Self {
        Self { version: HISTORY_FORMAT_VERSION, clippings }
    }

    /// Clippings restaures, dans l'ordre du document.
    pub fn into_clippings(self) -> Vec<Clipping> {
        self.clippings.into_iter().map(Clipping::new).collect()
    }
}

/// Serialise les textes ordonnes en JSON.
pub fn serialize_history(texts: Vec<String>) -> ClipResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&HistoryDocument::new(texts))?)
}

/// Deserialise un document JSON et verifie sa version.
pub fn deserialize_history(data: &[u8]) -> ClipResult<Vec<Clipping>> {
    let doc: HistoryDocument = serde_json::from_slice(data)?;
    if doc.version != HISTORY_FORMAT_VERSION {
        return Err(ClipError::UnsupportedVersion(doc.version));
    }
    Ok(doc.into_clippings())
}
