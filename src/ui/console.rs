// ClipStack - Collaborateurs console
// Rendu texte du bezel, du menu et du cycle de vie pour l'hote headless
//
// Chaque collaborateur ecrit dans un `Write` (stdout pour le binaire,
// un Vec<u8> dans les tests). Les erreurs d'ecriture sont ignorees :
// l'affichage n'a aucune influence sur l'etat de la pile.

use crate::history::stack::ClippingStack;
use crate::ui::{AppHost, Bezel, ClearConfirmation, MenuRenderer};
use std::io::Write;

/// Bezel rendu en texte.
#[derive(Debug)]
pub struct ConsoleBezel<W: Write> {
    out: W,
    shown: bool,
    paste_on_select: bool,
}

impl<W: Write> ConsoleBezel<W> {
    pub fn new(out: W, paste_on_select: bool) -> Self {
        Self { out, shown: false, paste_on_select }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Bezel for ConsoleBezel<W> {
    fn show(&mut self, text: &str, label: &str) {
        self.shown = true;
        let _ = writeln!(self.out, "[bezel {}] {}", label, text);
    }

    fn hide(&mut self) {
        if self.shown {
            self.shown = false;
            let _ = writeln!(self.out, "[bezel hidden]");
        }
    }

    fn is_shown(&self) -> bool {
        self.shown
    }

    fn should_selection_paste(&self) -> bool {
        self.paste_on_select
    }
}

/// Menu rendu en texte : une ligne par clipping, curseur marque `>`.
#[derive(Debug)]
pub struct ConsoleMenu<W: Write> {
    out: W,
    preview_length: usize,
    paste_on_select: bool,
}

impl<W: Write> ConsoleMenu<W> {
    pub fn new(out: W, preview_length: usize, paste_on_select: bool) -> Self {
        Self { out, preview_length, paste_on_select }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MenuRenderer for ConsoleMenu<W> {
    fn rebuild(&mut self, stack: &ClippingStack) {
        if stack.is_empty() {
            let _ = writeln!(self.out, "[menu] (empty)");
            return;
        }
        let _ = writeln!(self.out, "[menu]");
        for (i, clipping) in stack.iter().enumerate() {
            let marker = if i == stack.position() { '>' } else { ' ' };
            let _ = writeln!(
                self.out,
                "{} {:>3}. {}",
                marker,
                i + 1,
                clipping.preview(self.preview_length)
            );
        }
    }

    fn should_selection_paste(&self) -> bool {
        self.paste_on_select
    }
}

/// Cycle de vie de l'hote console.
///
/// La reponse a la confirmation de vidage est fournie a l'avance par
/// l'hote (`set_answer`) puisque stdin porte deja les commandes.
#[derive(Debug)]
pub struct ConsoleHost<W: Write> {
    out: W,
    answer: ClearConfirmation,
    active: bool,
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(out: W) -> Self {
        Self { out, answer: ClearConfirmation::accept(), active: false }
    }

    /// Reponse a donner a la prochaine confirmation.
    pub fn set_answer(&mut self, answer: ClearConfirmation) {
        self.answer = answer;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AppHost for ConsoleHost<W> {
    fn hide(&mut self) {
        self.active = false;
        let _ = writeln!(self.out, "[app hidden]");
    }

    fn activate(&mut self) {
        self.active = true;
    }

    fn confirm_clear_all(&mut self) -> ClearConfirmation {
        let _ = writeln!(
            self.out,
            "[confirm] clear all clippings? {}",
            if self.answer.confirmed { "yes" } else { "no" }
        );
        self.answer
    }
}
