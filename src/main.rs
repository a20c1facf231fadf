use clap::{Args, Parser, Subcommand};
use env_logger::Builder;
use log::{debug, LevelFilter};
use playfair::cli::{
    decrypt_text, encrypt_text, read_text, show_info, show_matrix, show_pairs, AlphabetOptions,
    CipherOptions,
};
use playfair::presets::Preset;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("PLAYFAIR_VERSION");
const BUILD: &str = env!("PLAYFAIR_BUILD");
const PROFILE: &str = env!("PLAYFAIR_PROFILE");
const GIT_HASH: &str = env!("PLAYFAIR_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "playfair")]
#[command(author, about = "Playfair digraph cipher for Romanian, English, Russian and custom alphabets", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct AlphabetArgs {
    /// Preset alphabet (romanian, english, russian)
    #[arg(long, short = 'a', default_value = "romanian", value_parser = parse_preset)]
    alphabet: Preset,

    /// Custom alphabet letters; replaces the preset
    #[arg(long)]
    letters: Option<String>,

    /// Separator letter (defaults to the preset's, or the last custom letter)
    #[arg(long, short = 's')]
    separator: Option<char>,

    /// Display name for a custom alphabet
    #[arg(long)]
    name: Option<String>,
}

impl From<AlphabetArgs> for AlphabetOptions {
    fn from(args: AlphabetArgs) -> Self {
        Self {
            preset: args.alphabet,
            letters: args.letters,
            separator: args.separator,
            name: args.name,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text
    #[command(alias = "e")]
    Encrypt {
        /// Key (at least 7 letters of the alphabet)
        #[arg(long, short = 'k', required = true)]
        key: String,

        #[command(flatten)]
        alphabet: AlphabetArgs,

        /// Read the text from a file
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Write the result to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Text to encrypt
        text: Option<String>,
    },

    /// Decrypt text
    #[command(alias = "d")]
    Decrypt {
        /// Key (at least 7 letters of the alphabet)
        #[arg(long, short = 'k', required = true)]
        key: String,

        #[command(flatten)]
        alphabet: AlphabetArgs,

        /// Read the text from a file
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Write the result to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Text to decrypt
        text: Option<String>,
    },

    /// Show the matrix built from a key
    #[command(alias = "m")]
    Matrix {
        /// Key (at least 7 letters of the alphabet)
        #[arg(long, short = 'k', required = true)]
        key: String,

        #[command(flatten)]
        alphabet: AlphabetArgs,
    },

    /// Show information about an alphabet
    Info {
        #[command(flatten)]
        alphabet: AlphabetArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how text is split into digraphs
    Pairs {
        #[command(flatten)]
        alphabet: AlphabetArgs,

        /// Text to split
        text: String,
    },
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn setup_logger() {
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn emit(result: &str, output: Option<&Path>) -> playfair::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", result))?;
            debug!("wrote {} characters to {}", result.chars().count(), path.display());
        }
        None => println!("{}", result),
    }
    Ok(())
}

fn main() -> ExitCode {
    setup_logger();
    let cli = Cli::parse();

    if cli.version {
        println!("playfair {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if Cli::command().print_help().is_err() {
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            key,
            alphabet,
            input,
            output,
            text,
        } => {
            let options = CipherOptions {
                key,
                alphabet: alphabet.into(),
            };
            read_text(text.as_deref(), input.as_deref())
                .and_then(|plaintext| encrypt_text(&plaintext, &options))
                .and_then(|ciphertext| emit(&ciphertext, output.as_deref()))
        }

        Commands::Decrypt {
            key,
            alphabet,
            input,
            output,
            text,
        } => {
            let options = CipherOptions {
                key,
                alphabet: alphabet.into(),
            };
            read_text(text.as_deref(), input.as_deref())
                .and_then(|ciphertext| decrypt_text(&ciphertext, &options))
                .and_then(|plaintext| emit(&plaintext, output.as_deref()))
        }

        Commands::Matrix { key, alphabet } => {
            show_matrix(&AlphabetOptions::from(alphabet), &key).map(|matrix| print!("{}", matrix))
        }

        Commands::Info { alphabet, json } => {
            show_info(&AlphabetOptions::from(alphabet), json).map(|info| print!("{}", info))
        }

        Commands::Pairs { alphabet, text } => {
            show_pairs(&AlphabetOptions::from(alphabet), &text).map(|pairs| print!("{}", pairs))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_validation() {
                eprintln!("Hint: run `playfair info` to see the accepted letters");
            }
            ExitCode::FAILURE
        }
    }
}
