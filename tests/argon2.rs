use argonite::derivation::argon2::{
    hash_d_raw, hash_i, hash_i_raw, hash_id_raw, hash_raw_context, Context, Error, Params,
    Variant,
};

fn params(m: u32, t: u32, p: u32, tag: u32) -> Params {
    Params {
        mem_cost: m,
        time_cost: t,
        lanes: p,
        threads: p,
        hash_length: tag,
        ..Params::default()
    }
}

#[test]
fn argon2_is_deterministic() {
    let a = hash_id_raw(3, 32, 4, b"password", b"saltsalt", 32).unwrap();
    let b = hash_id_raw(3, 32, 4, b"password", b"saltsalt", 32).unwrap();
    assert_eq!(a, b);
}

#[test]
fn argon2_changes_with_salt() {
    let a = hash_id_raw(3, 32, 4, b"password", b"saltAAAA", 32).unwrap();
    let b = hash_id_raw(3, 32, 4, b"password", b"saltBBBB", 32).unwrap();
    assert_ne!(a, b);

    // A single flipped salt byte is enough.
    let c = hash_id_raw(3, 32, 4, b"password", b"saltAAAB", 32).unwrap();
    assert_ne!(a, c);
}

#[test]
fn argon2_respects_output_length() {
    for tag in [4u32, 16, 32, 64, 128] {
        let out = hash_id_raw(1, 32, 4, b"password", b"saltsalt", tag).unwrap();
        assert_eq!(out.len(), tag as usize);
    }
}

#[test]
fn variants_produce_distinct_digests() {
    let d = hash_d_raw(2, 32, 2, b"password", b"saltsalt", 32).unwrap();
    let i = hash_i_raw(2, 32, 2, b"password", b"saltsalt", 32).unwrap();
    let id = hash_id_raw(2, 32, 2, b"password", b"saltsalt", 32).unwrap();
    assert_ne!(d, i);
    assert_ne!(d, id);
    assert_ne!(i, id);
}

#[test]
fn every_parameter_influences_the_digest() {
    let base = hash_id_raw(2, 64, 2, b"password", b"saltsalt", 32).unwrap();

    let t = hash_id_raw(3, 64, 2, b"password", b"saltsalt", 32).unwrap();
    let m = hash_id_raw(2, 128, 2, b"password", b"saltsalt", 32).unwrap();
    let p = hash_id_raw(2, 64, 4, b"password", b"saltsalt", 32).unwrap();
    let pw = hash_id_raw(2, 64, 2, b"passwore", b"saltsalt", 32).unwrap();
    let tag = hash_id_raw(2, 64, 2, b"password", b"saltsalt", 33).unwrap();

    assert_ne!(base, t);
    assert_ne!(base, m);
    assert_ne!(base, p);
    assert_ne!(base, pw);
    // Different tag lengths are domain-separated by H', not mere prefixes.
    assert_ne!(base[..], tag[..32]);
}

#[test]
fn argon2i_reference_vector_m64k() {
    let digest = hash_i_raw(2, 65536, 1, b"password", b"somesalt", 32).unwrap();
    assert_eq!(
        hex::encode(digest),
        "c1628832147d9720c5bd1cfd61367078729f6dfb6f8fea9ff98158e0d7816ed0"
    );
}

#[test]
fn argon2i_reference_vector_m64k_encoded() {
    let encoded = hash_i(2, 65536, 1, b"password", b"somesalt", 32).unwrap();
    assert_eq!(
        encoded,
        "$argon2i$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$wWKIMhR9lyDFvRz9YTZweHKfbftvj+qf+YFY4NeBbtA"
    );
}

#[test]
fn argon2id_reference_vector_m64k() {
    let digest = hash_id_raw(2, 65536, 1, b"password", b"somesalt", 32).unwrap();
    assert_eq!(
        hex::encode(digest),
        "09316115d5cf24ed5a15a31a3ba326e5cf32edc24702987c02b6566f61913cf7"
    );
}

#[test]
fn argon2id_reference_vector_four_passes() {
    let digest = hash_id_raw(4, 65536, 1, b"password", b"somesalt", 32).unwrap();
    assert_eq!(
        hex::encode(digest),
        "9025d48e68ef7395cca9079da4c4ec3affb3c8911fe4f86d1a2520856f63172c"
    );
}

#[test]
fn argon2i_reference_vector_two_lanes() {
    let digest = hash_i_raw(2, 256, 2, b"password", b"somesalt", 32).unwrap();
    assert_eq!(
        hex::encode(digest),
        "4ff5ce2769a1d7f4c8a491df09d41a9fbe90e5eb02155a13e4c01e20cd4eab61"
    );
}

#[test]
fn argon2i_reference_vector_short_tag() {
    let digest = hash_i_raw(2, 16, 2, b"Lorem ipsum", b"q7isXKjZJVfKRmSe", 16).unwrap();
    assert_eq!(hex::encode(digest), "c2e1b651dde4f514eb7d226c36f54ce6");

    let encoded = hash_i(2, 16, 2, b"Lorem ipsum", b"q7isXKjZJVfKRmSe", 16).unwrap();
    assert_eq!(
        encoded,
        "$argon2i$v=19$m=16,t=2,p=2$cTdpc1hLalpKVmZLUm1TZQ$wuG2Ud3k9RTrfSJsNvVM5g"
    );
}

/// RFC 9106 test vectors, sections 5.1 to 5.3.
///
/// Input:
///   password: 32 bytes of 0x01
///   salt: 16 bytes of 0x02
///   secret: 8 bytes of 0x03
///   associated data: 12 bytes of 0x04
///   parallelism: 4, tag length: 32, memory: 32 KiB, passes: 3
#[test]
fn rfc9106_keyed_test_vectors() {
    let keyed_params = || Params {
        secret: Some(vec![0x03u8; 8]),
        associated_data: Some(vec![0x04u8; 12]),
        ..params(32, 3, 4, 32)
    };

    let run = |variant: Variant| {
        let mut ctx = Context::new(
            variant,
            keyed_params(),
            vec![0x01u8; 32],
            vec![0x02u8; 16],
        );
        hash_raw_context(&mut ctx).unwrap()
    };

    assert_eq!(
        hex::encode(run(Variant::Argon2d)),
        "512b391b6f1162975371d30919734294f868e3be3984f3c1a13a4db9fabe4acb"
    );
    assert_eq!(
        hex::encode(run(Variant::Argon2i)),
        "c814d9d1dc7f37aa13f0d77f2494bda1c8de6b016dd388d29952a4c4672b6ce8"
    );

    // Argon2id tag published in RFC 9106 §5.3.
    let expected = [
        0x0d, 0x64, 0x0d, 0xf5, 0x8d, 0x78, 0x76, 0x6c, 0x08, 0xc0, 0x37, 0xa3, 0x4a, 0x8b, 0x53,
        0xc9, 0xd0, 0x1e, 0xf0, 0x45, 0x2d, 0x75, 0xb6, 0x5e, 0xb5, 0x25, 0x20, 0xe9, 0x6b, 0x01,
        0xe6, 0x59,
    ];
    assert_eq!(run(Variant::Argon2id), expected, "RFC 9106 §5.3 tag mismatch");
}

#[test]
fn smallest_legal_derivation_works() {
    let out = hash_id_raw(1, 8, 1, b"pass", b"saltsalt", 4).unwrap();
    assert_eq!(out.len(), 4);
}

// OWASP 2024 password-storage baseline.
#[test]
fn argon2_recommended_params() {
    let out = hash_id_raw(2, 19456, 1, b"my_secure_password", b"random_salt_16_b", 32).unwrap();
    assert_eq!(out.len(), 32);
}

#[test]
fn out_of_range_inputs_are_rejected() {
    assert_eq!(
        hash_id_raw(2, 65536, 1, b"password", b"salty", 32),
        Err(Error::SaltTooShort)
    );
    assert_eq!(
        hash_id_raw(2, 1, 1, b"password", b"somesalt", 32),
        Err(Error::MemoryTooLittle)
    );
    assert_eq!(
        hash_id_raw(0, 65536, 1, b"password", b"somesalt", 32),
        Err(Error::TimeTooSmall)
    );
    assert_eq!(
        hash_id_raw(2, 65536, 0, b"password", b"somesalt", 32),
        Err(Error::LanesTooFew)
    );
    assert_eq!(
        hash_id_raw(2, 65536, 0x100_0000, b"password", b"somesalt", 32),
        Err(Error::LanesTooMany)
    );
    assert_eq!(
        hash_id_raw(2, 65536, 1, b"password", b"somesalt", 3),
        Err(Error::OutputTooShort)
    );
}

#[test]
fn memory_below_the_lane_floor_is_raised_not_rejected() {
    // 8 blocks with 2 lanes is below 2 * 4 * lanes; the engine raises the
    // request instead of failing, matching the reference implementation.
    let out = hash_id_raw(1, 8, 2, b"password", b"saltsalt", 32).unwrap();
    assert_eq!(out.len(), 32);
}
