// ClipStack - Module history
// Gestion de l'historique du presse-papiers en memoire
//
// Ce module est independant de la plateforme (aucun appel systeme).
//
// # Sous-modules
// - `clipping` : valeur texte immuable, egalite par contenu
// - `stack`    : pile ClippingStack bornee, plus recente en tete,
//                avec curseur (`position`) et deduplication en tete
//
// # Architecture
// La pile utilise un Vec<Clipping> : l'index 0 est le plus recent, la
// queue est evincee quand `max_items` est depasse. Un flag `dirty`
// permet de ne sauvegarder que si l'historique a change.

/// Valeur texte d'un element de l'historique.
pub mod clipping;
/// Pile ordonnee et bornee avec curseur.
pub mod stack;

pub use clipping::Clipping;
pub use stack::ClippingStack;
