// ClipStack - Pile d'historique avec curseur
// Structure bornee, plus recente en tete, adressee par position
//
// Ce module implemente le stockage en memoire des clippings sous forme
// de liste ordonnee (index 0 = plus recent) et le curseur `position`
// qui designe l'element en surbrillance dans le bezel.
//
// # Capacite et eviction
// Lorsque `max_items` est depasse, l'element le plus ancien (queue) est
// supprime. Il n'y a pas d'epinglage : l'ordre de recence est preserve.
//
// # Curseur
// La pile est le seul proprietaire de `position`. Invariant :
// `position < len()` si la pile est non vide, `position == 0` sinon.
// La navigation sature aux extremites, elle ne boucle jamais.
//
// # Deduplication
// `insert` refuse l'insertion si le texte est identique a l'element en
// tete. Les doublons non adjacents sont conserves.
//
// # Dirty flag
// Positionne a chaque modification structurelle, remis a zero apres une
// sauvegarde reussie (via `reset_dirty`).

use crate::history::clipping::Clipping;
use tracing::trace;

/// Historique ordonne des clippings avec curseur.
#[derive(Debug, Clone)]
pub struct ClippingStack {
    items: Vec<Clipping>,
    position: usize,
    max_items: usize,
    dirty: bool,
}

impl ClippingStack {
    /// Cree une pile vide avec la capacite donnee (au moins 1).
    pub fn new(max_items: usize) -> Self {
        let max_items = max_items.max(1);
        Self {
            items: Vec::with_capacity(max_items.min(1024)),
            position: 0,
            max_items,
            dirty: false,
        }
    }

    /// Ajoute un texte en tete de pile.
    /// Retourne false si le texte est identique a l'element en tete.
    /// Ne remet pas le curseur a zero : c'est a l'appelant de decider.
    pub fn insert(&mut self, text: impl Into<String>) -> bool {
        let clipping = Clipping::new(text);
        if self.items.first() == Some(&clipping) {
            return false;
        }
        self.items.insert(0, clipping);
        self.dirty = true;
        self.enforce_capacity();
        true
    }

    /// Supprime les elements excedentaires en queue.
    fn enforce_capacity(&mut self) {
        while self.items.len() > self.max_items {
            self.items.pop();
            trace!(max_items = self.max_items, "evicted oldest clipping");
        }
        self.clamp_position();
    }

    /// Ramene le curseur dans `[0, len-1]` (ou 0 si vide).
    fn clamp_position(&mut self) {
        if self.items.is_empty() {
            self.position = 0;
        } else if self.position >= self.items.len() {
            self.position = self.items.len() - 1;
        }
    }

    /// Retourne l'element a l'index donne (0 = plus recent).
    pub fn item_at(&self, position: usize) -> Option<&Clipping> {
        self.items.get(position)
    }

    /// Nombre d'elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Retourne true si la pile est vide.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position courante du curseur.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Capacite maximale.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Avance d'un cran vers les elements plus anciens, sature a `len-1`.
    pub fn down(&mut self) {
        if self.position + 1 < self.items.len() {
            self.position += 1;
        }
    }

    /// Recule d'un cran vers les elements plus recents, sature a 0.
    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Deplace le curseur de `steps` (positif = plus ancien), borne a
    /// `[0, len-1]`. Sert aux sauts de page.
    pub fn move_by(&mut self, steps: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = (self.items.len() - 1) as isize;
        let target = (self.position as isize).saturating_add(steps).clamp(0, last);
        self.position = target as usize;
    }

    /// Place le curseur sur un index absolu, borne a `len-1`.
    /// Sans effet sur une pile vide.
    pub fn jump_to(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.position = index.min(self.items.len() - 1);
    }

    /// Remet le curseur en tete.
    pub fn reset_position(&mut self) {
        self.position = 0;
    }

    /// Retire l'element a `position` et le reinsere en tete.
    /// Ne modifie pas la valeur du curseur.
    pub fn move_item_to_top(&mut self, position: usize) {
        if position >= self.items.len() {
            return;
        }
        if position > 0 {
            let clipping = self.items.remove(position);
            self.items.insert(0, clipping);
            self.dirty = true;
        }
    }

    /// Supprime l'element sous le curseur.
    ///
    /// Si c'etait le dernier index et que la pile n'est pas vide, le
    /// curseur recule d'un cran ; sinon il designe l'element suivant.
    pub fn delete(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let removed = self.position;
        let was_last = removed + 1 == self.items.len();
        self.items.remove(removed);
        self.dirty = true;
        if self.items.is_empty() {
            self.position = 0;
        } else if was_last {
            self.position -= 1;
        }
    }

    /// Supprime l'element a un index arbitraire puis remet le curseur
    /// en tete, quel que soit l'index supprime.
    pub fn delete_at(&mut self, position: usize) {
        if position < self.items.len() {
            self.items.remove(position);
            self.dirty = true;
        }
        self.position = 0;
    }

    /// Vide la pile.
    pub fn clear(&mut self) {
        self.items.clear();
        self.position = 0;
        self.dirty = true;
    }

    /// Change la capacite (au moins 1) ; tronque la queue si necessaire.
    pub fn set_max_items(&mut self, max_items: usize) {
        self.max_items = max_items.max(1);
        if self.items.len() > self.max_items {
            self.dirty = true;
        }
        self.enforce_capacity();
    }

    /// Retourne un iterateur sur les clippings (plus recent en premier).
    pub fn iter(&self) -> std::slice::Iter<'_, Clipping> {
        self.items.iter()
    }

    /// Textes ordonnes (pour la serialisation).
    pub fn texts(&self) -> Vec<String> {
        self.items.iter().map(|c| c.full_text().to_string()).collect()
    }

    /// Reconstruit la pile a partir de clippings restaures.
    /// Tronque a `max_items` et remet le curseur en tete.
    pub fn load_from(&mut self, clippings: Vec<Clipping>) {
        self.items = clippings;
        self.items.truncate(self.max_items);
        self.position = 0;
        self.dirty = false;
    }

    /// Retourne true si la pile a ete modifiee depuis le dernier reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marque la pile comme non modifiee.
    pub fn reset_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for ClippingStack {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_MAX_ITEMS)
    }
}
