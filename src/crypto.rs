//! Cryptographic helpers for the token pipeline.
//!
//! These are tailored to the Thumbor token scheme and should not be used as
//! general-purpose functions: MD5 and ECB-mode AES are what the proxy
//! decrypts, not a recommendation.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes128;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use md5::{Digest, Md5};

/// AES block size; also the required key length and the boundary the token
/// plaintext is padded to.
pub const BLOCK_SIZE: usize = 16;

/// MD5 digest of `input`, rendered as 32 lowercase hex characters.
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Encrypt `plaintext` with AES-128 in ECB mode, no padding.
///
/// Each 16-byte block is encrypted independently with a cipher state local
/// to this call. `plaintext` must already be a multiple of [`BLOCK_SIZE`]
/// bytes long; the caller pads before encrypting.
pub fn aes128_ecb_encrypt(key: &[u8; BLOCK_SIZE], plaintext: &[u8]) -> Vec<u8> {
    debug_assert_eq!(
        plaintext.len() % BLOCK_SIZE,
        0,
        "plaintext length ({}) must be a multiple of {}",
        plaintext.len(),
        BLOCK_SIZE,
    );

    let cipher = Aes128::new(GenericArray::from_slice(key));
    let mut ciphertext = Vec::with_capacity(plaintext.len());
    for chunk in plaintext.chunks(BLOCK_SIZE) {
        let mut block = GenericArray::clone_from_slice(chunk);
        cipher.encrypt_block(&mut block);
        ciphertext.extend_from_slice(&block);
    }
    ciphertext
}

/// URL-safe base64 (`-`/`_` alphabet) with trailing `=` padding stripped,
/// matching Python's `urlsafe_b64encode` output minus the padding.
pub fn urlsafe_base64(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_is_lowercase_and_fixed_width() {
        let digest = md5_hex("my.server.com/some/path/to/image.jpg");
        assert_eq!(digest.len(), 32);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_aes_output_length_matches_input() {
        let key = *b"0123456789abcdef";
        let ciphertext = aes128_ecb_encrypt(&key, &[0u8; 48]);
        assert_eq!(ciphertext.len(), 48);
    }

    #[test]
    fn test_aes_identical_blocks_encrypt_identically() {
        // ECB has no chaining: repeated plaintext blocks produce repeated
        // ciphertext blocks.
        let key = *b"0123456789abcdef";
        let ciphertext = aes128_ecb_encrypt(&key, &[7u8; 32]);
        assert_eq!(ciphertext[..16], ciphertext[16..]);
    }

    #[test]
    fn test_urlsafe_base64_alphabet_and_no_padding() {
        // 0xfb 0xff forces '-' and '_' in the standard->urlsafe substitution
        let encoded = urlsafe_base64(&[0xfb, 0xef, 0xff]);
        assert_eq!(encoded, "--__");

        // One trailing byte would normally produce "==" padding
        let encoded = urlsafe_base64(&[0xff]);
        assert_eq!(encoded, "_w");
    }
}
