//! Command-line argument parsing.

use classic_crypto::CipherKind;

use clap::Parser;

/// Classical cipher tool.
#[derive(Parser, Debug, Clone)]
#[command(name = "classic")]
#[command(about = "Encrypt, decrypt and break classical ciphers over A-Z")]
#[command(version)]
pub struct Cli {
    /// Cipher type [hill, vigenere, substitution].
    #[arg(long)]
    pub cipher: CipherKind,

    /// Cipher key string.
    #[arg(long)]
    pub key: Option<String>,

    /// String for encryption (or known plaintext with --findkey).
    #[arg(long)]
    pub plaintext: Option<String>,

    /// String for decryption (or known ciphertext with --findkey).
    #[arg(long)]
    pub ciphertext: Option<String>,

    /// Find the Hill key from --plaintext and --ciphertext.
    #[arg(long)]
    pub findkey: bool,

    /// Print a random invertible Hill key of this order.
    #[arg(long, value_name = "ORDER")]
    pub genkey: Option<usize>,

    /// Seed for --genkey, for reproducible keys.
    #[arg(long, requires = "genkey")]
    pub seed: Option<u64>,

    /// Print key matrices as JSON instead of letters.
    #[arg(long)]
    pub json: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Encrypt { key: String, text: String },
    Decrypt { key: String, text: String },
    FindKey { plaintext: String, ciphertext: String },
    GenKey { order: usize, seed: Option<u64> },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves the flags into a single action, `None` when the usage is incomplete.
    ///
    /// Key recovery wins when `--findkey` comes with both texts and no key;
    /// otherwise a key is required and `--plaintext` takes precedence over
    /// `--ciphertext`.
    pub fn action(&self) -> Option<Action> {
        if let Some(order) = self.genkey {
            return Some(Action::GenKey {
                order,
                seed: self.seed,
            });
        }

        if self.findkey && self.key.is_none() {
            if let (Some(plaintext), Some(ciphertext)) = (&self.plaintext, &self.ciphertext) {
                return Some(Action::FindKey {
                    plaintext: plaintext.clone(),
                    ciphertext: ciphertext.clone(),
                });
            }
        }

        let key = self.key.clone()?;
        if let Some(text) = &self.plaintext {
            return Some(Action::Encrypt {
                key,
                text: text.clone(),
            });
        }
        self.ciphertext
            .clone()
            .map(|text| Action::Decrypt { key, text })
    }
}
