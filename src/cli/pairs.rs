use crate::cli::options::AlphabetOptions;
use crate::error::Result;

/// Show how `text` is split into digraphs before encryption
pub fn show_pairs(alphabet: &AlphabetOptions, text: &str) -> Result<String> {
    let session = alphabet.session()?;
    session.validator().validate_text(text)?;

    let pairs: Vec<String> = session
        .prepare_text(text)
        .iter()
        .map(|p| p.to_string())
        .collect();
    Ok(format!("{}\n", pairs.join(" ")))
}
