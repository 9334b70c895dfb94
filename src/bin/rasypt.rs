//! Rasypt CLI - Password-based text encryption
//!
//! Command-line interface for encrypting and decrypting short text strings
//! using PBEWithMD5AndDES (PBKDF1 key derivation with MD5, DES-CBC).

use clap::{Parser, Subcommand};
use std::process;

use rasypt::error::{ErrorKind, FailureClass, RasyptError, Result};
use rasypt::passphrase::{PasswordReader, ReaderPasswordReader, TerminalPasswordReader};
use rasypt::text_ops::{self, Mode};

#[derive(Parser)]
#[command(name = "rasypt")]
#[command(version)]
#[command(about = "Password-based text encryption.", long_about = None)]
struct Cli {
    /// Read password from stdin instead of from terminal
    #[arg(long, global = true)]
    password_stdin: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a text string
    #[command(alias = "e")]
    Encrypt {
        /// Text to encrypt
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Decrypt an encrypted text string
    #[command(alias = "d")]
    Decrypt {
        /// Encrypted text to decrypt
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let (mode, text) = match cli.command {
        Commands::Encrypt { text } => (Mode::Encrypt, text),
        Commands::Decrypt { text } => (Mode::Decrypt, text),
    };

    match run(mode, &text, cli.password_stdin) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(mode: Mode, text: &str, password_stdin: bool) -> Result<String> {
    check_field("text", text)?;

    let mut reader = get_password_reader(password_stdin);
    let password = reader.read_password()?;
    check_field("password", &password)?;

    text_ops::transform(mode, &password, text)
}

/// Input fields must be non-blank and must not contain spaces or tabs.
fn check_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RasyptError::with_kind(
            FailureClass::BadInput,
            ErrorKind::BlankInput,
            format!("{} must not be empty", name),
        ));
    }
    if value.contains(' ') || value.contains('\t') {
        return Err(RasyptError::with_kind(
            FailureClass::BadInput,
            ErrorKind::ForbiddenWhitespace,
            format!("{} must not contain spaces or tabs", name),
        ));
    }
    Ok(())
}

fn get_password_reader(use_stdin: bool) -> Box<dyn PasswordReader> {
    if use_stdin {
        Box::new(ReaderPasswordReader::new(Box::new(std::io::stdin())))
    } else {
        Box::new(TerminalPasswordReader)
    }
}
