// Licensed under the Apache-2.0 license

mod common;

use common::*;
use cot_error::{CotError, ErrorKind, MethodKind};
use cot_image_fake_keys::{
    CONTENT_ED25519_SEED, CONTENT_RSA_KEY_PKCS8, NON_TRUSTED_WORLD_ECC_KEY_PRIVATE,
    ROOT_ED25519_SEED, ROOT_RSA_KEY_PKCS8,
};
use cot_image_gen::SigningKey;
use cot_image_types::HashAlgorithm;
use cot_tbbr::{tbbr_table, TbbrImageId::*};

fn key_hash(alg: HashAlgorithm, key: &SigningKey) -> RootKey {
    let info = digest_info(alg, &key.spki());
    // Last `digest_len` bytes of the DigestInfo are the digest
    RootKey::KeyHash(alg, info[info.len() - alg.digest_len()..].to_vec())
}

#[test]
fn test_rotpk_hash() {
    let fixture = Fixture::default();
    let chain = fixture.build();
    let table = tbbr_table().unwrap();
    let env = Env {
        rotpk: key_hash(HashAlgorithm::Sha256, &fixture.rot),
        ..Env::new(&fixture)
    };
    let mut module = new_module(&table, env, Counters::new(0));

    assert_eq!(verify(&mut module, &chain, Bl2Image), Ok(()));
    // Root key hash and BL2 hash
    assert_eq!(module.crypto().digests.get(), 2);
}

#[test]
fn test_rotpk_hash_mismatch() {
    let fixture = Fixture::default();
    let chain = fixture.build();
    let table = tbbr_table().unwrap();
    let env = Env {
        rotpk: key_hash(HashAlgorithm::Sha384, &fixture.prot),
        ..Env::new(&fixture)
    };
    let mut module = new_module(&table, env, Counters::new(0));

    let rejection = verify(&mut module, &chain, TrustedKeyCert).unwrap_err();
    assert_eq!(rejection.error, CotError::METHOD_ROTPK_MISMATCH);
    assert_eq!(rejection.kind(), ErrorKind::MethodFailed(MethodKind::Signature));
    assert_eq!(module.crypto().signatures.get(), 0);
}

#[test]
fn test_self_signed_impostor() {
    let fixture = Fixture::default();
    let impostor = Fixture {
        rot: ecc(&NON_TRUSTED_WORLD_ECC_KEY_PRIVATE),
        ..Default::default()
    };
    let chain = impostor.build();
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    let rejection = verify(&mut module, &chain, Bl31Image).unwrap_err();
    assert_eq!(rejection.failed_at, TrustedKeyCert);
    assert_eq!(rejection.error, CotError::METHOD_ROTPK_MISMATCH);
    assert_eq!(rejection.kind(), ErrorKind::UntrustedAncestor);
    assert_eq!(module.storage().writes, 0);
}

#[test]
fn test_rotpk_not_deployed() {
    let impostor = Fixture {
        rot: ecc(&NON_TRUSTED_WORLD_ECC_KEY_PRIVATE),
        ..Default::default()
    };
    let chain = impostor.build();
    let table = tbbr_table().unwrap();
    let env = Env {
        rotpk: RootKey::NotDeployed,
        ..Env::new(&impostor)
    };
    let mut module = new_module(&table, env, Counters::new(0));

    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));

    // The signature is still checked
    let mut chain = impostor.build();
    chain.flip_last(TrustedBootFwCert);
    assert_eq!(
        verify(&mut module, &chain, TrustedBootFwCert)
            .unwrap_err()
            .error,
        CotError::METHOD_SIGNATURE_INVALID
    );
}

#[test]
fn test_dual_roots_are_independent() {
    let fixture = Fixture::default();
    let chain = fixture.build();
    let table = tbbr_table().unwrap();
    let env = Env {
        prot_pk: RootKey::Key(fixture.rot.spki()),
        ..Env::new(&fixture)
    };
    let mut module = new_module(&table, env, Counters::new(0));

    let rejection = verify(&mut module, &chain, Bl33Image).unwrap_err();
    assert_eq!(rejection.failed_at, NonTrustedFwContentCert);
    assert_eq!(rejection.error, CotError::METHOD_ROTPK_MISMATCH);

    assert_eq!(verify(&mut module, &chain, Bl2Image), Ok(()));
    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
}

#[test]
fn test_ed25519_chain() {
    let fixture = Fixture {
        rot: SigningKey::ed25519(&ROOT_ED25519_SEED).unwrap(),
        trusted_world: SigningKey::ed25519(&CONTENT_ED25519_SEED).unwrap(),
        ..Default::default()
    };
    let chain = fixture.build();
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
    assert_eq!(verify(&mut module, &chain, Bl32Image), Ok(()));

    let mut chain = fixture.build();
    chain.flip_last(SocFwKeyCert);
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));
    assert_eq!(
        verify(&mut module, &chain, SocFwKeyCert).unwrap_err().error,
        CotError::METHOD_SIGNATURE_INVALID
    );
}

#[test]
fn test_rsa_pss_chain() {
    let fixture = Fixture {
        rot: SigningKey::rsa_pss(ROOT_RSA_KEY_PKCS8, HashAlgorithm::Sha256).unwrap(),
        trusted_world: SigningKey::rsa_pss(CONTENT_RSA_KEY_PKCS8, HashAlgorithm::Sha384).unwrap(),
        ..Default::default()
    };
    let chain = fixture.build();
    let table = tbbr_table().unwrap();
    let env = Env {
        rotpk: key_hash(HashAlgorithm::Sha256, &fixture.rot),
        ..Env::new(&fixture)
    };
    let mut module = new_module(&table, env, Counters::new(0));

    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
    assert_eq!(verify(&mut module, &chain, Bl32Image), Ok(()));
    assert_eq!(verify(&mut module, &chain, Bl2Image), Ok(()));

    let mut chain = fixture.build();
    chain.flip_last(TrustedOsFwKeyCert);
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));
    let rejection = verify(&mut module, &chain, Bl32Image).unwrap_err();
    assert_eq!(rejection.failed_at, TrustedOsFwKeyCert);
    assert_eq!(rejection.error, CotError::METHOD_SIGNATURE_INVALID);
    assert_eq!(module.storage().writes, 0);
}
