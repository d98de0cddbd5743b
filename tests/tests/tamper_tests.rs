// tests/tamper_tests.rs
//! Every single-bit change to ciphertext, tag, nonce or associated data
//! must be rejected as corrupt data.

use bitcrypt::prelude::*;
use bitcrypt_tests::{flip_bit, hex_bits, random_bits, test_rng};

fn assert_rejects_every_flip<M: AeadMode>(nonce_bytes: usize, tag_bits: Option<usize>) {
    let mut rng = test_rng(7);
    let cipher = Aes::new(&random_bits(&mut rng, 16)).unwrap();
    let nonce = random_bits(&mut rng, nonce_bytes);
    let adata = random_bits(&mut rng, 5);
    let pt = random_bits(&mut rng, 21);

    let ct = M::encrypt(&cipher, &pt, &nonce, Some(&adata), tag_bits).unwrap();
    assert_eq!(M::decrypt(&cipher, &ct, &nonce, Some(&adata), tag_bits).unwrap(), pt);

    for i in 0..ct.bit_len() {
        let err = M::decrypt(&cipher, &flip_bit(&ct, i), &nonce, Some(&adata), tag_bits)
            .expect_err("tampered ciphertext accepted");
        let err: bitcrypt::api::Error = err.into();
        assert_eq!(err.kind(), ErrorKind::CorruptData, "{} bit {}", M::NAME, i);
    }

    for i in 0..adata.bit_len() {
        let result = M::decrypt(&cipher, &ct, &nonce, Some(&flip_bit(&adata, i)), tag_bits);
        assert!(result.is_err(), "{} accepted modified associated data", M::NAME);
    }

    for i in (0..nonce.bit_len()).step_by(7) {
        let result = M::decrypt(&cipher, &ct, &flip_bit(&nonce, i), Some(&adata), tag_bits);
        assert!(result.is_err(), "{} accepted modified nonce", M::NAME);
    }

    // Dropping the associated data altogether
    assert!(M::decrypt(&cipher, &ct, &nonce, None, tag_bits).is_err());
}

#[test]
fn test_ccm_rejects_tampering() {
    assert_rejects_every_flip::<Ccm>(13, None);
    assert_rejects_every_flip::<Ccm>(7, Some(128));
}

#[test]
fn test_ocb2_rejects_tampering() {
    assert_rejects_every_flip::<Ocb2>(16, None);
    assert_rejects_every_flip::<Ocb2>(16, Some(128));
}

#[test]
fn test_gcm_rejects_tampering() {
    assert_rejects_every_flip::<Gcm>(12, None);
    assert_rejects_every_flip::<Gcm>(8, None);
    assert_rejects_every_flip::<Gcm>(60, Some(96));
}

#[test]
fn test_no_plaintext_on_failure() {
    let cipher = Aes::new(&hex_bits("000102030405060708090a0b0c0d0e0f")).unwrap();
    let nonce = hex_bits("cafebabefacedbaddecaf888");
    let ct = Gcm::encrypt(&cipher, &hex_bits("00112233"), &nonce, None, None).unwrap();
    let tampered = flip_bit(&ct, ct.bit_len() - 1);

    match Gcm::decrypt(&cipher, &tampered, &nonce, None, None) {
        Err(bitcrypt::algorithms::Error::Authentication { algorithm }) => assert_eq!(algorithm, "gcm"),
        other => panic!("expected authentication failure, got {:?}", other),
    }
}

fn assert_rejects_truncation<M: AeadMode>(nonce_bytes: usize) {
    let mut rng = test_rng(11);
    let cipher = Aes::new(&random_bits(&mut rng, 16)).unwrap();
    let nonce = random_bits(&mut rng, nonce_bytes);
    let ct = M::encrypt(&cipher, &random_bits(&mut rng, 10), &nonce, None, None).unwrap();

    // Includes lengths shorter than the tag itself
    for len in (0..ct.bit_len()).step_by(8) {
        let err = M::decrypt(&cipher, &ct.clamp(len), &nonce, None, None)
            .expect_err("truncated ciphertext accepted");
        let err: bitcrypt::api::Error = err.into();
        assert_eq!(err.kind(), ErrorKind::CorruptData, "{} length {}", M::NAME, len);
    }
}

#[test]
fn test_truncation_is_corrupt_data() {
    assert_rejects_truncation::<Ccm>(13);
    assert_rejects_truncation::<Ocb2>(16);
    assert_rejects_truncation::<Gcm>(12);
}
