use classic_crypto::Cipher;
use classic_crypto::errors::ClassicCryptoError;
use classic_crypto::hill::{HillCipher, find_key, find_key_string};
use classic_crypto::ring::{Ring, SquareMatrix};
use classic_crypto::text::{to_indices, upper_only};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn textbook_encrypt_and_decrypt() -> Result<(), ClassicCryptoError> {
    let cipher = HillCipher::try_with("GYBNQKURP")?;

    assert_eq!(cipher.encrypt("ACT")?, "POH");
    assert_eq!(cipher.decrypt("POH")?, "ACT");

    Ok(())
}

#[test]
fn key_length_must_be_square() {
    let result = HillCipher::try_with("ABCDE");
    assert!(matches!(result, Err(ClassicCryptoError::InvalidKeyLength(5))));
}

#[test]
fn message_length_must_be_multiple_of_order() -> Result<(), ClassicCryptoError> {
    let cipher = HillCipher::try_with("GYBNQKURP")?;
    let result = cipher.encrypt("AB");
    assert!(matches!(
        result,
        Err(ClassicCryptoError::LengthNotMultiple { length: 2, order: 3 })
    ));
    Ok(())
}

#[test]
fn key_recovery_matches_textbook_key() -> Result<(), ClassicCryptoError> {
    let cipher = HillCipher::try_with("GYBNQKURP")?;
    // Three blocks starting with the ACT -> POH pair
    let plaintext = "ACTBCDKLM";
    let ciphertext = cipher.encrypt(plaintext)?;
    assert!(ciphertext.starts_with("POH"));

    let key = find_key(plaintext, &ciphertext)?;
    assert_eq!(&key, cipher.key());
    assert_eq!(find_key_string(plaintext, &ciphertext)?, "GYBNQKURP");

    let recovered = HillCipher::from_matrix(key)?;
    assert_eq!(recovered.decrypt("POH")?, "ACT");

    Ok(())
}

#[test]
fn single_block_is_not_enough_for_recovery() {
    assert!(matches!(
        find_key("ACT", "POH"),
        Err(ClassicCryptoError::InvalidSampleLength(3))
    ));
}

#[test]
fn invertibility_gate() {
    // [[d, 0], [0, 1]] has determinant d
    for determinant in 0..26i64 {
        let key: String = [determinant, 0, 0, 1]
            .iter()
            .map(|&v| (b'A' + v as u8) as char)
            .collect();
        let coprime = determinant % 2 != 0 && determinant % 13 != 0;
        match HillCipher::try_with(&key) {
            Ok(_) => assert!(coprime, "key {} should be rejected", key),
            Err(ClassicCryptoError::KeyNotInvertible { determinant: d, .. }) => {
                assert!(!coprime, "key {} should be accepted", key);
                assert_eq!(d, determinant);
            }
            Err(e) => panic!("unexpected error for {}: {}", key, e),
        }
    }
}

#[test]
fn generate_rejects_huge_orders_without_panicking() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = HillCipher::generate(1usize << 32, &mut rng);
    assert!(matches!(result, Err(ClassicCryptoError::InvalidParameters(_))));
}

#[test]
fn wikipedia_two_by_two_examples() -> Result<(), ClassicCryptoError> {
    let hill = HillCipher::try_with("HILL")?;
    assert_eq!(hill.encrypt("short example")?, "APADJTFTWLFJ");
    assert_eq!(hill.decrypt("APADJTFTWLFJ")?, "SHORTEXAMPLE");

    let help = HillCipher::try_with("DDCF")?;
    assert_eq!(help.encrypt("HELP")?, "HIAT");
    assert_eq!(find_key_string("HELP", "HIAT")?, "DDCF");
    Ok(())
}

#[test]
fn key_is_shareable_across_threads() -> Result<(), ClassicCryptoError> {
    let cipher = HillCipher::try_with("GYBNQKURP")?;
    let messages = ["ACT", "CAT", "DOG", "HATHATHAT"];

    std::thread::scope(|s| {
        let handles: Vec<_> = messages
            .iter()
            .map(|&message| {
                let cipher = &cipher;
                s.spawn(move || {
                    let ct = cipher.encrypt(message).unwrap();
                    cipher.decrypt(&ct).unwrap()
                })
            })
            .collect();
        for (handle, message) in handles.into_iter().zip(messages) {
            assert_eq!(handle.join().unwrap(), message);
        }
    });

    Ok(())
}

#[quickcheck]
fn prop_roundtrip(seed: u64, order: u8, message: String) -> TestResult {
    let order = 2 + (order % 4) as usize;
    let Some(letters) = upper_only(&message) else {
        return TestResult::discard();
    };
    let usable = letters.len() - letters.len() % order;
    if usable == 0 {
        return TestResult::discard();
    }
    let text = &letters[..usable];

    let mut rng = StdRng::seed_from_u64(seed);
    let cipher = HillCipher::generate(order, &mut rng).unwrap();
    let ciphertext = cipher.encrypt(text).unwrap();

    let decrypted = cipher.decrypt(&ciphertext).unwrap();
    TestResult::from_bool(ciphertext.len() == text.len() && decrypted == text)
}

#[quickcheck]
fn prop_key_recovery(key_seed: u64, text_seed: u64, order: u8) -> TestResult {
    let order = 2 + (order % 3) as usize;
    let ring = Ring::latin();

    let mut rng = StdRng::seed_from_u64(key_seed);
    let cipher = HillCipher::generate(order, &mut rng).unwrap();

    // Any invertible plaintext matrix works as a known sample
    let mut rng = StdRng::seed_from_u64(text_seed);
    let sample = SquareMatrix::random_invertible_mod(order, &ring, &mut rng).unwrap();
    let plaintext = sample.to_display_string();

    let blocks = to_indices(&plaintext);
    let mut encrypted = Vec::with_capacity(blocks.len());
    for block in blocks.chunks(order) {
        encrypted.extend(cipher.encrypt_block(block).unwrap());
    }
    let ciphertext = classic_crypto::text::from_indices(&encrypted);

    TestResult::from_bool(&find_key(&plaintext, &ciphertext).unwrap() == cipher.key())
}
