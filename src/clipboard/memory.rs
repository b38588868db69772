// ClipStack - Presse-papiers en memoire
//
// Implementation de `Pasteboard` sans dependance systeme. Elle retient
// la valeur en tete, le marqueur "autogenere" de la derniere ecriture et
// le nombre de frappes "coller" emises, ce qui suffit a l'hote console
// et aux tests.

use crate::clipboard::Pasteboard;
use tracing::debug;

/// Presse-papiers en memoire.
#[derive(Debug, Clone, Default)]
pub struct MemoryPasteboard {
    top: Option<String>,
    autogenerated: bool,
    pastes: u64,
}

impl MemoryPasteboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// La derniere ecriture etait-elle autogeneree ?
    pub fn is_autogenerated(&self) -> bool {
        self.autogenerated
    }

    /// Nombre de frappes "coller" emises.
    pub fn paste_count(&self) -> u64 {
        self.pastes
    }

    fn write(&mut self, text: &str, autogenerated: bool) {
        self.top = Some(text.to_string());
        self.autogenerated = autogenerated;
        debug!(len = text.len(), autogenerated, "pasteboard written");
    }
}

impl Pasteboard for MemoryPasteboard {
    fn set(&mut self, text: &str) {
        self.write(text, false);
    }

    fn set_autogenerated(&mut self, text: &str) {
        self.write(text, true);
    }

    fn top_item(&self) -> Option<String> {
        self.top.clone()
    }

    fn emit_paste_keystroke(&mut self) {
        self.pastes += 1;
        debug!(count = self.pastes, "paste keystroke emitted");
    }
}
