use bitcrypt_algorithms::{
    codec::{Base64, Codec, Hex, Utf8},
    AeadMode, Aes, BitArray, Ccm, Gcm, Ocb2,
};

fn main() -> Result<(), bitcrypt_algorithms::Error> {
    // Bit arrays need not be byte aligned
    let bits = Hex::to_bits("deadbeef")?.clamp(27);
    println!("{} bits: {:?}", bits.bit_len(), bits);
    println!("packed: {:x?}", bits.to_packed());

    let key = Hex::to_bits("000102030405060708090a0b0c0d0e0f")?;
    let cipher = Aes::new(&key)?;
    let message = Utf8::to_bits("Hello, bit arrays!")?;
    let adata = Utf8::to_bits("header")?;

    let nonce = Hex::to_bits("00112233445566778899aabbcc")?;
    let sealed = Ccm::encrypt(&cipher, &message, &nonce, Some(&adata), None)?;
    println!("ccm:  {}", Base64::from_bits(&sealed)?);

    let nonce = Hex::to_bits("00112233445566778899aabbccddeeff")?;
    let sealed = Ocb2::encrypt(&cipher, &message, &nonce, Some(&adata), None)?;
    println!("ocb2: {}", Base64::from_bits(&sealed)?);

    let nonce = Hex::to_bits("00112233445566778899aabb")?;
    let sealed = Gcm::encrypt(&cipher, &message, &nonce, Some(&adata), None)?;
    println!("gcm:  {}", Base64::from_bits(&sealed)?);

    let opened: BitArray = Gcm::decrypt(&cipher, &sealed, &nonce, Some(&adata), None)?;
    println!("back: {}", Utf8::from_bits(&opened)?);
    Ok(())
}
