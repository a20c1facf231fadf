use crate::alphabet::AlphabetSpec;
use crate::error::{PlayfairError, Result};
use serde::{Deserialize, Serialize};

pub const ROMANIAN_LETTERS: &str = "AĂÂBCDEFGHIÎJKLMNOPQRSȘTȚUVWXYZ";
pub const ENGLISH_LETTERS: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";
pub const RUSSIAN_LETTERS: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// Built-in alphabets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Romanian,
    English,
    Russian,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Self::Romanian => "Romanian",
            Self::English => "English",
            Self::Russian => "Russian",
        }
    }

    pub fn separator(self) -> char {
        match self {
            Self::Romanian => 'K',
            Self::English => 'J',
            Self::Russian => 'Ё',
        }
    }

    pub fn letters(self) -> &'static str {
        match self {
            Self::Romanian => ROMANIAN_LETTERS,
            Self::English => ENGLISH_LETTERS,
            Self::Russian => RUSSIAN_LETTERS,
        }
    }

    pub fn spec(self) -> AlphabetSpec {
        AlphabetSpec::new(self.letters(), self.separator(), self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = PlayfairError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "romanian" | "ro" => Ok(Self::Romanian),
            "english" | "en" => Ok(Self::English),
            "russian" | "ru" => Ok(Self::Russian),
            _ => Err(PlayfairError::UnknownPreset(s.to_string())),
        }
    }
}

/// Custom alphabet. Without an explicit separator the last letter is
/// taken out of the alphabet and used as separator.
pub fn custom(letters: &str, separator: Option<char>, name: &str) -> Result<AlphabetSpec> {
    let letters = letters.trim();
    let separator = match separator.or_else(|| letters.chars().last()) {
        Some(sep) => sep,
        None => {
            return Err(PlayfairError::InvalidAlphabet(
                "alphabet cannot be empty".into(),
            ))
        }
    };

    let spec = AlphabetSpec::new(letters, separator, name);
    if spec.is_empty() {
        return Err(PlayfairError::InvalidAlphabet(
            "alphabet cannot be empty".into(),
        ));
    }
    Ok(spec)
}
