use crate::cli::options::AlphabetOptions;
use crate::error::Result;
use log::info;

/// Options for the encrypt and decrypt commands
#[derive(Debug, Clone, Default)]
pub struct CipherOptions {
    pub key: String,
    pub alphabet: AlphabetOptions,
}

/// Encrypt `plaintext` with the configured alphabet and key
pub fn encrypt_text(plaintext: &str, options: &CipherOptions) -> Result<String> {
    let mut session = options.alphabet.session()?;
    info!("encrypting with the {} alphabet", session.alphabet().name());
    session.encrypt(&options.key, plaintext)
}

/// Decrypt `ciphertext` with the configured alphabet and key
pub fn decrypt_text(ciphertext: &str, options: &CipherOptions) -> Result<String> {
    let mut session = options.alphabet.session()?;
    info!("decrypting with the {} alphabet", session.alphabet().name());
    session.decrypt(&options.key, ciphertext)
}
