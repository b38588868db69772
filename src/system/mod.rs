// ClipStack - Module system
// Briques systeme independantes de l'interface
//
// # Sous-modules
// - `keys`  : identite logique des touches et parsing des noms de touches
// - `timer` : file de taches differees (collage synthetique) avec horloge
//             injectable pour des tests deterministes

/// Identite des touches et evenements clavier.
pub mod keys;
/// Taches differees et horloges.
pub mod timer;
