use crate::alphabet::AlphabetSpec;
use crate::error::{PlayfairError, Result};
use crate::presets::{custom, Preset};
use crate::session::Playfair;
use std::path::Path;

/// Alphabet selection shared by every command
#[derive(Debug, Clone, Default)]
pub struct AlphabetOptions {
    pub preset: Preset,
    /// Custom letters; overrides the preset when set
    pub letters: Option<String>,
    pub separator: Option<char>,
    pub name: Option<String>,
}

impl AlphabetOptions {
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            ..Default::default()
        }
    }

    /// Resolve to a concrete alphabet
    pub fn resolve(&self) -> Result<AlphabetSpec> {
        match &self.letters {
            Some(letters) => {
                let name = self.name.as_deref().unwrap_or("Custom");
                custom(letters, self.separator, name)
            }
            None => {
                let separator = self.separator.unwrap_or(self.preset.separator());
                let name = self.name.as_deref().unwrap_or(self.preset.name());
                Ok(AlphabetSpec::new(self.preset.letters(), separator, name))
            }
        }
    }

    /// Open a cipher session over the resolved alphabet
    pub fn session(&self) -> Result<Playfair> {
        Playfair::new(self.resolve()?)
    }
}

/// Pick the text to work on: the positional argument, or the contents
/// of `input` when given. Exactly one of them must be present.
pub fn read_text(text: Option<&str>, input: Option<&Path>) -> Result<String> {
    match (text, input) {
        (Some(_), Some(_)) => Err(PlayfairError::InvalidText(
            "give either TEXT or --input, not both".into(),
        )),
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?.trim().to_string()),
        (None, None) => Err(PlayfairError::InvalidText("text cannot be empty".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_romanian() {
        let spec = AlphabetOptions::default().resolve().unwrap();
        assert_eq!(spec.name(), "Romanian");
        assert_eq!(spec.separator(), 'K');
    }

    #[test]
    fn test_custom_letters_override_preset() {
        let opts = AlphabetOptions {
            preset: Preset::English,
            letters: Some("ABCDEFGHIJKLMNOP".into()),
            separator: None,
            name: Some("Sixteen".into()),
        };
        let spec = opts.resolve().unwrap();
        assert_eq!(spec.name(), "Sixteen");
        assert_eq!(spec.separator(), 'P');
        assert_eq!(spec.len(), 15);
    }

    #[test]
    fn test_separator_override_on_preset() {
        let opts = AlphabetOptions {
            separator: Some('Q'),
            ..AlphabetOptions::preset(Preset::English)
        };
        let spec = opts.resolve().unwrap();
        assert_eq!(spec.separator(), 'Q');
        assert!(!spec.contains('Q'));
    }

    #[test]
    fn test_read_text_sources() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("message.txt");
        std::fs::write(&path, "attack at dawn\n").unwrap();

        assert_eq!(read_text(None, Some(&path)).unwrap(), "attack at dawn");
        assert_eq!(read_text(Some("hello"), None).unwrap(), "hello");
        assert!(read_text(None, None).is_err());
        assert!(read_text(Some("hello"), Some(&path)).is_err());
    }
}
