use crate::cli::options::AlphabetOptions;
use crate::error::Result;

/// Describe the selected alphabet, as text or JSON
pub fn show_info(alphabet: &AlphabetOptions, json: bool) -> Result<String> {
    let info = alphabet.session()?.describe();
    if json {
        let mut out = serde_json::to_string_pretty(&info)?;
        out.push('\n');
        return Ok(out);
    }

    let mut output = info.to_string();
    output.push('\n');
    output.push_str("The separator is left out of the matrix. It splits doubled\n");
    output.push_str("letters and pads odd-length text.\n");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::AlphabetInfo;
    use crate::presets::Preset;

    #[test]
    fn test_show_info_text() {
        let info = show_info(&AlphabetOptions::preset(Preset::Romanian), false).unwrap();
        assert!(info.contains("Alphabet: Romanian"));
        assert!(info.contains("Letter count: 30"));
        assert!(info.contains("Separator: K"));
        assert!(info.contains("Matrix dimensions: 5×6"));
    }

    #[test]
    fn test_show_info_json() {
        let out = show_info(&AlphabetOptions::preset(Preset::English), true).unwrap();
        let info: AlphabetInfo = serde_json::from_str(&out).unwrap();
        assert_eq!(info.letter_count, 25);
        assert_eq!(info.separator, 'J');
        assert_eq!(info.dimensions.rows, 5);
    }
}
