//! Runs a resolved [`Action`] against the cipher library.

use classic_crypto::hill::{HillCipher, find_key};
use classic_crypto::{Cipher, CipherKind, ClassicCryptoError, SquareMatrix};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Action;

/// Executes `action` and returns the text to print on success.
pub fn run(kind: CipherKind, action: Action, json: bool) -> Result<String, ClassicCryptoError> {
    log::debug!("running {:?} with the {} cipher", action, kind);

    match action {
        Action::Encrypt { key, text } => kind.build(&key)?.encrypt(&text),
        Action::Decrypt { key, text } => kind.build(&key)?.decrypt(&text),
        Action::FindKey {
            plaintext,
            ciphertext,
        } => {
            require_hill(kind, "--findkey")?;
            render_key(&find_key(&plaintext, &ciphertext)?, json)
        }
        Action::GenKey { order, seed } => {
            require_hill(kind, "--genkey")?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let cipher = HillCipher::generate(order, &mut rng)?;
            render_key(cipher.key(), json)
        }
    }
}

fn require_hill(kind: CipherKind, flag: &str) -> Result<(), ClassicCryptoError> {
    if kind != CipherKind::Hill {
        return Err(ClassicCryptoError::InvalidParameters(format!(
            "{} is only supported by the hill cipher, got {}",
            flag, kind
        )));
    }
    Ok(())
}

fn render_key(key: &SquareMatrix, json: bool) -> Result<String, ClassicCryptoError> {
    if json {
        Ok(serde_json::to_string(key)?)
    } else {
        Ok(key.to_display_string())
    }
}
