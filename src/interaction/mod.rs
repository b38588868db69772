// ClipStack - Controleur d'interactions
// Traduit les actions utilisateur en mutations de la pile et en directives
//
// Ce module est le coeur du comportement de ClipStack : il recoit des
// evenements discrets (touches dans le bezel, relachement du
// modificateur, clics dans le menu, "clear all", raccourci d'activation,
// nouvelle valeur du presse-papiers) et les applique a la `ClippingStack`
// en emettant les directives d'affichage vers les collaborateurs.
//
// # Injection des dependances
// `Interactions` emprunte la pile et chaque collaborateur pour la duree
// d'un evenement (`Collaborators`). Il ne possede aucun etat persistant :
// l'hote le reconstruit a chaque evenement. Pas de cycle de possession.
//
// # Configuration
// Les options (`sticky_bezel`, `move_clippings_after_use`,
// `ask_before_clearing`) sont lues via `ConfigSource` au moment de la
// decision, jamais mises en cache.
//
// # Placer / coller
// Placer = ecrire dans le presse-papiers puis masquer l'application.
// Coller = placer, puis planifier la frappe "coller" `PASTE_DELAY` plus
// tard sur la file de taches. Les evenements qui collent retournent le
// `TimerId` : l'hote le conserve au-dela de l'evenement pour annuler.
//
// # Machine d'etat
// Hidden -> Showing(p) via `display_at` ; Showing(p) -> Showing(p') a
// chaque navigation ; Showing -> Hidden sur Echap, selection validee ou
// suppression qui vide la pile.

#[cfg(test)]
mod tests;

use crate::clipboard::Pasteboard;
use crate::config::source::ConfigSource;
use crate::constants::{PAGE_STEP, PASTE_DELAY};
use crate::history::stack::ClippingStack;
use crate::system::keys::{Key, KeyEvent};
use crate::system::timer::{DeferredScheduler, DeferredTask, TimerId};
use crate::ui::{AppHost, Bezel, MenuRenderer};
use tracing::{debug, info};

/// Collaborateurs externes empruntes pour la duree d'un evenement.
pub struct Collaborators<'a> {
    pub pasteboard: &'a mut dyn Pasteboard,
    pub bezel: &'a mut dyn Bezel,
    pub menu: &'a mut dyn MenuRenderer,
    pub app: &'a mut dyn AppHost,
    pub config: &'a mut dyn ConfigSource,
    pub scheduler: &'a mut dyn DeferredScheduler,
}

/// Controleur d'interactions sur la pile.
pub struct Interactions<'a> {
    stack: &'a mut ClippingStack,
    collab: Collaborators<'a>,
}

impl<'a> Interactions<'a> {
    pub fn new(stack: &'a mut ClippingStack, collab: Collaborators<'a>) -> Self {
        Self { stack, collab }
    }

    /// Pile sous-jacente (lecture seule).
    pub fn stack(&self) -> &ClippingStack {
        self.stack
    }

    // ---------------------------------------------------------------
    // Presse-papiers
    // ---------------------------------------------------------------

    /// Place le texte dans le presse-papiers puis masque l'application.
    fn place(&mut self, text: &str) {
        self.collab.pasteboard.set(text);
        self.hide();
    }

    /// Place le texte, puis planifie la frappe "coller".
    fn paste(&mut self, text: &str) -> TimerId {
        self.place(text);
        self.collab
            .scheduler
            .schedule(PASTE_DELAY, DeferredTask::PasteKeystroke)
    }

    /// Masque le bezel et l'application.
    fn hide(&mut self) {
        self.collab.bezel.hide();
        self.collab.app.hide();
    }

    /// Execute les taches differees echues.
    pub fn run_due_tasks(&mut self) {
        for task in self.collab.scheduler.take_due() {
            match task {
                DeferredTask::PasteKeystroke => self.collab.pasteboard.emit_paste_keystroke(),
            }
        }
    }

    // ---------------------------------------------------------------
    // Bezel
    // ---------------------------------------------------------------

    /// Relachement du modificateur du raccourci : valide la selection
    /// sauf si le bezel est configure "collant".
    pub fn on_modifier_released(&mut self) -> Option<TimerId> {
        if self.collab.config.sticky_bezel() {
            return None;
        }
        self.perform_selection()
    }

    /// Raccourci d'activation : affiche le bezel en tete, ou avance d'un
    /// cran s'il est deja affiche.
    pub fn on_activation_hotkey(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        if self.collab.bezel.is_shown() {
            self.stack.down();
        } else {
            self.stack.reset_position();
        }
        self.display_at(self.stack.position());
    }

    /// Appui de touche dans le bezel.
    pub fn on_key_down(&mut self, event: KeyEvent) {
        // Re-presser la touche de base du raccourci navigue
        if self.collab.config.hotkey_base() == Some(event.key) {
            if event.shift {
                self.stack.up();
            } else {
                self.stack.down();
            }
            self.display_at(self.stack.position());
            return;
        }

        match event.key {
            Key::Escape => self.hide(),
            Key::Down | Key::Right => {
                self.stack.down();
                self.display_at(self.stack.position());
            }
            Key::Up | Key::Left => {
                self.stack.up();
                self.display_at(self.stack.position());
            }
            Key::PageDown => self.move_and_display(PAGE_STEP),
            Key::PageUp => self.move_and_display(-PAGE_STEP),
            Key::Home => self.jump_to_number(1),
            Key::End => {
                if !self.stack.is_empty() {
                    self.stack.jump_to(self.stack.len() - 1);
                    self.display_at(self.stack.position());
                }
            }
            key @ (Key::Digit(_) | Key::KeypadDigit(_)) => {
                // "1" = premier element ... "0" = dixieme
                let number = match key.digit() {
                    Some(0) => 10,
                    Some(d) => d as usize,
                    None => return,
                };
                self.jump_to_number(number);
            }
            Key::Return | Key::KeypadEnter => {
                self.perform_selection();
            }
            Key::Delete | Key::ForwardDelete => {
                self.stack.delete();
                info!(remaining = self.stack.len(), "clipping deleted from bezel");
                self.collab.menu.rebuild(self.stack);
                if self.stack.is_empty() {
                    self.hide();
                } else {
                    self.display_at(self.stack.position());
                }
            }
            _ => {}
        }
    }

    /// Saut numerique : `number` est 1-indexe, borne a la taille de la pile.
    fn jump_to_number(&mut self, number: usize) {
        if self.stack.is_empty() {
            return;
        }
        self.stack.jump_to(number.saturating_sub(1));
        self.display_at(self.stack.position());
    }

    fn move_and_display(&mut self, steps: isize) {
        if self.stack.is_empty() {
            return;
        }
        self.stack.move_by(steps);
        self.display_at(self.stack.position());
    }

    /// Valide l'element sous le curseur depuis le bezel.
    /// Retourne la frappe "coller" planifiee, le cas echeant.
    pub fn perform_selection(&mut self) -> Option<TimerId> {
        let text = match self.stack.item_at(self.stack.position()) {
            Some(clipping) => clipping.full_text().to_string(),
            None => return None,
        };
        let pasted = if self.collab.bezel.should_selection_paste() {
            Some(self.paste(&text))
        } else {
            self.place(&text);
            None
        };
        if self.collab.config.move_clippings_after_use() {
            self.stack.move_item_to_top(self.stack.position());
            self.stack.reset_position();
            self.collab.menu.rebuild(self.stack);
        }
        pasted
    }

    /// Point de passage unique de l'affichage du bezel.
    ///
    /// Position hors bornes : le texte retombe sur l'element 0, le
    /// libelle reste la position demandee, 1-indexee.
    pub fn display_at(&mut self, position: usize) {
        if self.stack.is_empty() {
            return;
        }
        let clipping = match self.stack.item_at(position).or_else(|| self.stack.item_at(0)) {
            Some(c) => c,
            None => return,
        };
        let text = clipping.full_text().to_string();
        let label = (position + 1).to_string();
        debug!(position, "bezel display");
        self.collab.bezel.show(&text, &label);
        self.collab.app.activate();
    }

    // ---------------------------------------------------------------
    // Menu
    // ---------------------------------------------------------------

    /// Clic sur une entree du menu ; `index` est l'index de l'entree de
    /// premier niveau (sous-menus d'actions alternatives deja resolus).
    pub fn on_menu_item_activated(&mut self, index: usize, wants_paste: bool) -> Option<TimerId> {
        let text = match self.stack.item_at(index) {
            Some(clipping) => clipping.full_text().to_string(),
            None => {
                self.hide();
                return None;
            }
        };
        let pasted = if wants_paste {
            Some(self.paste(&text))
        } else {
            self.place(&text);
            None
        };
        if self.collab.config.move_clippings_after_use() {
            self.stack.move_item_to_top(index);
            let position = self.stack.position();
            if index == position {
                self.stack.reset_position();
            } else if index > position {
                // L'element sous le curseur a glisse d'un cran
                self.stack.jump_to(position + 1);
            }
            self.collab.menu.rebuild(self.stack);
        }
        pasted
    }

    /// Clic simple : colle ou place selon la preference du menu.
    pub fn on_menu_selection(&mut self, index: usize) -> Option<TimerId> {
        let wants_paste = self.collab.menu.should_selection_paste();
        self.on_menu_item_activated(index, wants_paste)
    }

    /// Action alternative "placer".
    pub fn on_menu_place(&mut self, index: usize) {
        self.on_menu_item_activated(index, false);
    }

    /// Action alternative "coller".
    pub fn on_menu_paste(&mut self, index: usize) -> Option<TimerId> {
        self.on_menu_item_activated(index, true)
    }

    /// Suppression depuis le menu ; le curseur revient en tete.
    pub fn on_menu_delete_activated(&mut self, index: usize) {
        self.stack.delete_at(index);
        info!(index, remaining = self.stack.len(), "clipping deleted from menu");
        self.collab.menu.rebuild(self.stack);
    }

    // ---------------------------------------------------------------
    // Clear all
    // ---------------------------------------------------------------

    /// Demande de vidage de l'historique, avec confirmation optionnelle.
    pub fn on_clear_all_requested(&mut self) {
        if !self.collab.config.ask_before_clearing() {
            self.clear_all();
            return;
        }
        let answer = self.collab.app.confirm_clear_all();
        if answer.confirmed && !self.stack.is_empty() {
            self.clear_all();
        }
        if answer.suppress_future {
            self.collab.config.disable_ask_before_clearing();
        }
    }

    /// Vide la pile ; vide aussi le presse-papiers s'il porte l'element
    /// en tete (ecriture marquee autogeneree).
    fn clear_all(&mut self) {
        let front = match self.stack.item_at(0) {
            Some(clipping) => clipping.full_text().to_string(),
            None => return,
        };
        if self.collab.pasteboard.top_item().as_deref() == Some(front.as_str()) {
            self.collab.pasteboard.set_autogenerated("");
        }
        let count = self.stack.len();
        self.stack.clear();
        info!(count, "history cleared");
        self.collab.menu.rebuild(self.stack);
    }

    // ---------------------------------------------------------------
    // Presse-papiers entrant
    // ---------------------------------------------------------------

    /// Nouvelle valeur observee dans le presse-papiers.
    /// Retourne true si elle a ete ajoutee a la pile.
    pub fn on_pasteboard_changed(&mut self, text: &str, autogenerated: bool) -> bool {
        if autogenerated || text.is_empty() {
            return false;
        }
        if !self.stack.insert(text) {
            return false;
        }
        debug!(len = text.len(), count = self.stack.len(), "clipping recorded");
        self.stack.reset_position();
        self.collab.menu.rebuild(self.stack);
        true
    }
}
