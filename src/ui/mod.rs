// ClipStack - Module ui
// Contrats avec les collaborateurs d'affichage
//
// Le rendu (fenetre du bezel, menu de la barre d'etat, boites de
// dialogue) est hors du coeur. Le controleur d'interactions emet des
// directives vers ces traits, implementes par l'hote.
//
// # Sous-modules
// - `console` : implementations texte pour l'hote sans interface
//
// # Machine d'etat du bezel
// Hidden -> Showing(p) a la premiere directive `show`, Showing(p) ->
// Showing(p') a chaque navigation (pas de masquage intermediaire),
// Showing -> Hidden sur `hide`.

/// Implementations console des collaborateurs.
pub mod console;

pub use console::{ConsoleBezel, ConsoleHost, ConsoleMenu};

use crate::history::stack::ClippingStack;

/// Bezel : fenetre affichant le clipping en surbrillance.
pub trait Bezel {
    /// Affiche (ou met a jour si deja affiche) le texte et le libelle.
    fn show(&mut self, text: &str, label: &str);
    /// Masque le bezel.
    fn hide(&mut self);
    /// Le bezel est-il affiche ?
    fn is_shown(&self) -> bool;
    /// Valider une selection doit-il coller (sinon seulement placer) ?
    fn should_selection_paste(&self) -> bool;
}

/// Menu de la barre d'etat.
pub trait MenuRenderer {
    /// Reconstruit le menu a partir de la pile.
    fn rebuild(&mut self, stack: &ClippingStack);
    /// Un clic simple sur une entree doit-il coller ?
    fn should_selection_paste(&self) -> bool;
}

/// Reponse de l'utilisateur a la confirmation de vidage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearConfirmation {
    /// L'utilisateur a confirme
    pub confirmed: bool,
    /// Case "ne plus demander" cochee
    pub suppress_future: bool,
}

impl ClearConfirmation {
    pub fn accept() -> Self {
        Self { confirmed: true, suppress_future: false }
    }

    pub fn decline() -> Self {
        Self { confirmed: false, suppress_future: false }
    }

    /// Meme reponse, avec la case "ne plus demander" cochee.
    pub fn suppressing(self) -> Self {
        Self { suppress_future: true, ..self }
    }
}

/// Cycle de vie de l'application hote.
pub trait AppHost {
    /// Masque l'application (et rend le focus a l'application precedente).
    fn hide(&mut self);
    /// Active l'application et la passe au premier plan.
    fn activate(&mut self);
    /// Demande confirmation avant de vider l'historique.
    fn confirm_clear_all(&mut self) -> ClearConfirmation;
}
