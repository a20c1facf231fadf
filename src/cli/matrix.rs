use crate::cli::options::AlphabetOptions;
use crate::error::Result;

/// Build the matrix for `key` and render it with its alphabet
pub fn show_matrix(alphabet: &AlphabetOptions, key: &str) -> Result<String> {
    let mut session = alphabet.session()?;
    let matrix = session.build_matrix(key)?;

    let mut output = String::new();
    output.push_str(&format!(
        "Playfair matrix ({}, {} letters):\n",
        matrix.dimensions(),
        matrix.filled()
    ));
    output.push_str(&matrix.to_string());
    output.push('\n');
    output.push_str(&format!("Keyword: {}\n", matrix.keyword()));

    let spec = session.alphabet();
    output.push_str(&format!("Separator (excluded letter): {}\n", spec.separator()));
    output.push_str(&format!("Matrix alphabet: {}\n", spec.letters_string()));

    Ok(output)
}
