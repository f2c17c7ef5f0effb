use argonite::hash::{blake2b, blake2b_long, Blake2b};

/// RFC 7693 Appendix A: BLAKE2b-512 of the empty message.
#[test]
fn blake2b_rfc7693_empty_vector() {
    let digest = blake2b(64, b"");
    let expected = hex::decode(
        "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
         d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce",
    )
    .unwrap();
    assert_eq!(digest, expected);
}

/// RFC 7693 Appendix A: BLAKE2b-512 of "abc".
#[test]
fn blake2b_rfc7693_abc_vector() {
    let digest = blake2b(64, b"abc");
    let expected = hex::decode(
        "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
         7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
    )
    .unwrap();
    assert_eq!(digest, expected);
}

#[test]
fn streaming_matches_one_shot_for_any_chunking() {
    let data: Vec<u8> = (0..1337u32).map(|i| (i % 251) as u8).collect();
    let reference = blake2b(64, &data);

    for chunk_size in [1usize, 7, 64, 127, 128, 129, 500] {
        let mut ctx = Blake2b::new(64);
        for chunk in data.chunks(chunk_size) {
            ctx.update(chunk);
        }
        assert_eq!(ctx.finalize().to_vec(), reference, "chunk size {chunk_size}");
    }
}

#[test]
fn variable_length_derivation_covers_both_regimes() {
    // At or below 64 bytes H' is a single length-prefixed hash.
    let short = blake2b_long(48, b"seed");
    assert_eq!(short.len(), 48);

    let mut direct = Blake2b::new(48);
    direct.update(&48u32.to_le_bytes());
    direct.update(b"seed");
    assert_eq!(short, direct.finalize()[..48].to_vec());

    // Above 64 bytes the 32-byte chain takes over; a 1024-byte block
    // expansion is the heaviest user in this crate.
    let block = blake2b_long(1024, b"seed");
    assert_eq!(block.len(), 1024);
    assert_ne!(block[..32], block[32..64]);
}
