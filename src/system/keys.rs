// ClipStack - Identite des touches
// Touches reconnues par le bezel et parsing depuis un nom de touche
//
// Le bezel recoit des evenements clavier deja decodes par l'hote : ce
// module ne connait pas les codes materiels, seulement l'identite
// logique de la touche (fleche, chiffre de la rangee principale ou du
// pave numerique, lettre...) et l'etat de Shift.
//
// # Format des noms
// - Navigation : `up`, `down`, `left`, `right`, `pageup`, `pagedown`,
//   `home`, `end`
// - Validation : `return` / `enter`, `kpenter`
// - Suppression : `delete` / `backspace`, `forwarddelete` / `del`
// - Chiffres : `0`-`9`, `kp0`-`kp9`
// - Lettres : `a`-`z`
// - Modificateur : prefixe `shift+` (ex: `shift+v`)

/// Identite logique d'une touche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Return,
    KeypadEnter,
    /// Backspace (la touche "delete" du clavier Mac)
    Delete,
    ForwardDelete,
    /// Chiffre de la rangee principale
    Digit(u8),
    /// Chiffre du pave numerique
    KeypadDigit(u8),
    /// Lettre, toujours en minuscule
    Char(char),
    Tab,
    Space,
}

impl Key {
    /// Parse une touche depuis son nom (insensible a la casse).
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        let key = match lower.as_str() {
            "escape" | "esc" => Self::Escape,
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            "pageup" | "pgup" => Self::PageUp,
            "pagedown" | "pgdn" => Self::PageDown,
            "home" => Self::Home,
            "end" => Self::End,
            "return" | "enter" => Self::Return,
            "kpenter" => Self::KeypadEnter,
            "delete" | "backspace" => Self::Delete,
            "forwarddelete" | "del" => Self::ForwardDelete,
            "tab" => Self::Tab,
            "space" => Self::Space,
            other => return Self::parse_single(other),
        };
        Some(key)
    }

    /// Chiffres, chiffres du pave numerique et lettres.
    fn parse_single(s: &str) -> Option<Self> {
        if let Some(rest) = s.strip_prefix("kp") {
            return Self::parse_digit(rest).map(Self::KeypadDigit);
        }
        if let Some(d) = Self::parse_digit(s) {
            return Some(Self::Digit(d));
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(Self::Char(c.to_ascii_lowercase())),
            _ => None,
        }
    }

    fn parse_digit(s: &str) -> Option<u8> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|d| d as u8),
            _ => None,
        }
    }

    /// Valeur du chiffre, rangee principale ou pave numerique.
    pub fn digit(self) -> Option<u8> {
        match self {
            Self::Digit(d) | Self::KeypadDigit(d) => Some(d),
            _ => None,
        }
    }
}

/// Un appui de touche recu par le bezel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
}

impl KeyEvent {
    /// Appui sans modificateur.
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    /// Appui avec Shift.
    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }

    /// Parse un appui depuis un nom, avec prefixe `shift+` optionnel.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        match lower.strip_prefix("shift+") {
            Some(rest) => Key::parse(rest).map(Self::shifted),
            None => Key::parse(&lower).map(Self::plain),
        }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}
