// ClipStack - Structure Clipping
// Represente une valeur texte enregistree depuis le presse-papiers
//
// Un clipping est immuable une fois cree. L'egalite porte uniquement
// sur le texte exact : c'est elle qui sert a la deduplication en tete
// de pile et a la comparaison avec le presse-papiers avant un "clear all".
//
// # Portabilite
// Ce module est en pur Rust, sans dependance systeme.

/// Une valeur texte de l'historique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clipping {
    full_text: String,
}

impl Clipping {
    /// Cree un clipping a partir du texte complet.
    pub fn new(full_text: impl Into<String>) -> Self {
        Self { full_text: full_text.into() }
    }

    /// Texte complet du clipping.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Retourne un apercu tronque : premiere ligne, `max_chars` caracteres
    /// au plus, terminee par "..." si elle a ete coupee.
    pub fn preview(&self, max_chars: usize) -> String {
        let first_line = self.full_text.lines().next().unwrap_or("");
        if first_line.chars().count() <= max_chars {
            first_line.to_string()
        } else {
            let mut s: String = first_line.chars().take(max_chars.saturating_sub(3)).collect();
            s.push_str("...");
            s
        }
    }
}

impl From<&str> for Clipping {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Clipping {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short() {
        let c = Clipping::new("hello");
        assert_eq!(c.preview(50), "hello");
    }

    #[test]
    fn test_preview_long() {
        let c = Clipping::new("a".repeat(100));
        let p = c.preview(20);
        assert_eq!(p.chars().count(), 20);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_preview_multiline() {
        let c = Clipping::new("line1\nline2\nline3");
        assert_eq!(c.preview(50), "line1");
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let c = Clipping::new("éééé");
        assert_eq!(c.preview(4), "éééé");
    }

    #[test]
    fn test_equality_is_by_text() {
        assert_eq!(Clipping::new("x"), Clipping::from("x"));
        assert_ne!(Clipping::new("x"), Clipping::new("x "));
    }
}
