// tests/integration_tests.rs
//! End-to-end use of the facade crate

use bitcrypt::prelude::*;
use bitcrypt_tests::hex_bits;

/// Password-derived key, then encrypt-and-authenticate under every mode
#[test]
fn test_password_to_ciphertext() {
    let salt = Hex::to_bits("5eed5eed5eed5eed").unwrap();
    let key = pbkdf2(&Utf8::to_bits("hunter2").unwrap(), &salt, 1000, 256).unwrap();
    assert_eq!(key.bit_len(), 256);

    let cipher = Aes::new(&key).unwrap();
    assert_eq!(cipher.rounds(), 14);

    let message = Utf8::to_bits("The quick brown fox jumps over the lazy dog").unwrap();
    let adata = Utf8::to_bits("v1").unwrap();

    let nonce = Base64::to_bits("AAECAwQFBgcICQoL").unwrap();
    let sealed = Gcm::encrypt(&cipher, &message, &nonce, Some(&adata), None).unwrap();
    let wire = Base64::from_bits(&sealed).unwrap();
    let opened = Gcm::decrypt(&cipher, &Base64::to_bits(&wire).unwrap(), &nonce, Some(&adata), None)
        .unwrap();
    assert_eq!(
        Utf8::from_bits(&opened).unwrap(),
        "The quick brown fox jumps over the lazy dog"
    );

    let nonce = Hex::to_bits("000102030405060708090a0b0c").unwrap();
    let sealed = Ccm::encrypt(&cipher, &message, &nonce, Some(&adata), None).unwrap();
    assert_eq!(Ccm::decrypt(&cipher, &sealed, &nonce, Some(&adata), None).unwrap(), message);

    let nonce = Hex::to_bits("000102030405060708090a0b0c0d0e0f").unwrap();
    let sealed = Ocb2::encrypt(&cipher, &message, &nonce, Some(&adata), None).unwrap();
    assert_eq!(Ocb2::decrypt(&cipher, &sealed, &nonce, Some(&adata), None).unwrap(), message);
}

#[test]
fn test_error_taxonomy() {
    let short_key = Aes::new(&hex_bits("0011")).unwrap_err();
    let err: Error = short_key.into();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    let bad_hex: Error = Hex::to_bits("xyz").unwrap_err().into();
    assert_eq!(bad_hex.kind(), ErrorKind::InvalidParameter);
    assert!(matches!(bad_hex, Error::InvalidEncoding { format: "hex", .. }));

    let cipher = Aes::new(&hex_bits("000102030405060708090a0b0c0d0e0f")).unwrap();
    let nonce = hex_bits("000102030405060708090a0b");
    let ct = Gcm::encrypt(&cipher, &BitArray::new(), &nonce, None, None).unwrap();
    let wrong = Gcm::decrypt(&cipher, &ct, &nonce, Some(&hex_bits("00")), None).unwrap_err();
    let err: Error = wrong.into();
    assert_eq!(err.kind(), ErrorKind::CorruptData);
}

#[test]
fn test_result_ext_context() {
    fn open(ct: &BitArray) -> Result<BitArray> {
        let cipher = Aes::new(&hex_bits("000102030405060708090a0b0c0d0e0f"))?;
        Ocb2::decrypt(&cipher, ct, &hex_bits("000102030405060708090a0b0c0d0e0f"), None, None)
            .with_context("session open")
    }

    match open(&hex_bits("00112233445566778899")) {
        Err(Error::AuthenticationFailed { context }) => assert_eq!(context, "session open"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_nonce_requirements() {
    let cipher = Aes::new(&hex_bits("000102030405060708090a0b0c0d0e0f")).unwrap();
    let pt = hex_bits("00");

    for bytes in 0..7 {
        let nonce = BitArray::from_bytes(&vec![0; bytes]);
        let err: Error = Ccm::encrypt(&cipher, &pt, &nonce, None, None).unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
    assert!(Ccm::encrypt(&cipher, &pt, &BitArray::from_bytes(&[0; 7]), None, None).is_ok());

    for bytes in [0usize, 8, 12, 15, 17, 32] {
        let nonce = BitArray::from_bytes(&vec![0; bytes]);
        assert!(Ocb2::encrypt(&cipher, &pt, &nonce, None, None).is_err());
    }
}

#[test]
fn test_equal_respects_length() {
    let a = hex_bits("00000000");
    let b = a.clamp(24);
    assert!(!a.equal(&b));
    assert!(!b.equal(&a));
    assert!(a.equal(&a.clone()));
    assert!(BitArray::new().equal(&BitArray::new()));
}

#[test]
fn test_hmac_and_hash_through_prelude() {
    let digest = Sha256::hash_str("abc").unwrap();
    assert_eq!(
        Hex::from_bits(&digest).unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );

    let mut hmac = Hmac::<Sha256>::new(&Utf8::to_bits("Jefe").unwrap()).unwrap();
    let tag = hmac.mac(&Utf8::to_bits("what do ya want for nothing?").unwrap()).unwrap();
    assert_eq!(
        Hex::from_bits(&tag).unwrap(),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
    hmac.reset();
    assert!(hmac
        .verify(&Utf8::to_bits("what do ya want for nothing?").unwrap(), &tag)
        .unwrap());
}
