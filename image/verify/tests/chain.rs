// Licensed under the Apache-2.0 license

mod common;

use common::*;
use cot_error::{CotError, ErrorKind, MethodKind};
use cot_image_gen::container;
use cot_image_types::{
    AuthMethodDesc, AuthParamRef, CotNode, CotTable, ImageFormat, CONTAINER_HEADER_BYTE_SIZE,
};
use cot_image_verify::Rejection;
use cot_tbbr::{
    tbbr_auth_module, tbbr_table, TbbrImageId, TbbrImageId::*, RAW_DATA, SIG, SIG_ALG, SUBJECT_PK,
};

fn setup() -> (Fixture, Chain) {
    let fixture = Fixture::default();
    let chain = fixture.build();
    (fixture, chain)
}

#[test]
fn test_full_chain() {
    let (fixture, chain) = setup();
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    for id in TbbrImageId::ALL {
        assert_eq!(verify(&mut module, &chain, id), Ok(()), "{id:?}");
    }
    for id in TbbrImageId::ALL {
        assert!(module.is_authenticated(id), "{id:?}");
    }
}

#[test]
fn test_ancestors_verified_once() {
    let (fixture, chain) = setup();
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
    assert!(module.is_authenticated(TrustedKeyCert));
    assert!(module.is_authenticated(SocFwKeyCert));
    assert!(module.is_authenticated(SocFwContentCert));
    assert_eq!(module.crypto().signatures.get(), 3);
    assert_eq!(module.crypto().digests.get(), 1);

    // Sibling under the same content certificate
    assert_eq!(verify(&mut module, &chain, SocFwConfig), Ok(()));
    assert_eq!(module.crypto().signatures.get(), 3);
    assert_eq!(module.crypto().digests.get(), 2);

    // Second branch under the shared trusted key certificate
    assert_eq!(verify(&mut module, &chain, Bl32Image), Ok(()));
    assert_eq!(module.crypto().signatures.get(), 5);
    assert_eq!(module.crypto().digests.get(), 3);

    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
    assert_eq!(module.crypto().signatures.get(), 5);
    assert_eq!(module.crypto().digests.get(), 3);
}

#[test]
fn test_verified_ancestors_need_no_loader() {
    let (fixture, mut chain) = setup();
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    for id in [TrustedKeyCert, SocFwKeyCert, SocFwContentCert] {
        assert_eq!(verify(&mut module, &chain, id), Ok(()));
    }
    for id in [TrustedKeyCert, SocFwKeyCert, SocFwContentCert] {
        chain.remove(id);
    }
    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
}

#[test]
fn test_ancestor_not_loaded() {
    let (fixture, mut chain) = setup();
    chain.remove(SocFwKeyCert);
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    let rejection = verify(&mut module, &chain, Bl31Image).unwrap_err();
    assert_eq!(
        rejection,
        Rejection {
            image: Bl31Image,
            failed_at: SocFwKeyCert,
            error: CotError::ANCESTOR_NOT_LOADED,
        }
    );
    assert_eq!(rejection.kind(), ErrorKind::UntrustedAncestor);
    assert!(!module.is_authenticated(SocFwContentCert));
    assert!(!module.is_authenticated(TrustedKeyCert));
}

#[test]
fn test_bad_child_signature() {
    let (fixture, mut chain) = setup();
    chain.flip_last(SocFwKeyCert);
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    let rejection = verify(&mut module, &chain, SocFwKeyCert).unwrap_err();
    assert_eq!(rejection.failed_at, SocFwKeyCert);
    assert_eq!(rejection.error, CotError::METHOD_SIGNATURE_INVALID);
    assert_eq!(rejection.kind(), ErrorKind::MethodFailed(MethodKind::Signature));
    assert!(module.is_authenticated(TrustedKeyCert));
    assert!(!module.is_authenticated(SocFwKeyCert));

    let rejection = verify(&mut module, &chain, Bl31Image).unwrap_err();
    assert_eq!(rejection.image, Bl31Image);
    assert_eq!(rejection.failed_at, SocFwKeyCert);
    assert_eq!(rejection.kind(), ErrorKind::UntrustedAncestor);
}

#[test]
fn test_tampered_tbs() {
    let (fixture, mut chain) = setup();
    chain.patch(SocFwContentCert, b"SoC Firmware", b"SoC Firmwarf");
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    let rejection = verify(&mut module, &chain, SocFwConfig).unwrap_err();
    assert_eq!(rejection.failed_at, SocFwContentCert);
    assert_eq!(rejection.error, CotError::METHOD_SIGNATURE_INVALID);
}

#[test]
fn test_bad_root_signature() {
    let (fixture, mut chain) = setup();
    chain.flip_last(TrustedKeyCert);
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    let rejection = verify(&mut module, &chain, Bl31Image).unwrap_err();
    assert_eq!(
        rejection,
        Rejection {
            image: Bl31Image,
            failed_at: TrustedKeyCert,
            error: CotError::METHOD_SIGNATURE_INVALID,
        }
    );
    assert_eq!(rejection.kind(), ErrorKind::UntrustedAncestor);
    for id in TbbrImageId::ALL {
        assert!(!module.is_authenticated(id), "{id:?}");
    }

    // The independent root still verifies
    assert_eq!(verify(&mut module, &chain, Bl2Image), Ok(()));
}

#[test]
fn test_tampered_payload() {
    let (fixture, mut chain) = setup();
    let good = chain.get(Bl31Image).to_vec();
    chain.get_mut(Bl31Image)[0] ^= 0x80;
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    let rejection = verify(&mut module, &chain, Bl31Image).unwrap_err();
    assert_eq!(rejection.failed_at, Bl31Image);
    assert_eq!(rejection.error, CotError::METHOD_HASH_MISMATCH);
    assert_eq!(rejection.kind(), ErrorKind::MethodFailed(MethodKind::Hash));
    assert!(module.is_authenticated(SocFwContentCert));
    assert!(!module.is_authenticated(Bl31Image));

    chain.set(Bl31Image, good);
    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
}

#[test]
fn test_container_header_is_hashed() {
    let (fixture, mut chain) = setup();
    chain.set(Bl32Image, container(fixture.tos_svn + 8, common::BL32).unwrap());
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    let rejection = verify(&mut module, &chain, Bl32Image).unwrap_err();
    assert_eq!(rejection.failed_at, Bl32Image);
    assert_eq!(rejection.error, CotError::METHOD_HASH_MISMATCH);
    assert_eq!(
        module.storage().get(cot_tbbr::TbbrNvCounter::TrustedOs),
        Some(0)
    );
}

#[test]
fn test_truncated_images() {
    let (fixture, chain) = setup();
    let table = tbbr_table().unwrap();

    for id in [TrustedKeyCert, SocFwKeyCert, TrustedOsFwContentCert, Bl32Image] {
        let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));
        let buf = chain.get(id);
        let rejection = module
            .verify_image(&chain, id, &buf[..buf.len() - 1])
            .unwrap_err();
        assert_eq!(rejection.failed_at, id);
        assert_eq!(rejection.kind(), ErrorKind::MalformedImage, "{id:?}");
    }

    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));
    let buf = chain.get(Bl32Image);
    assert_eq!(
        module
            .verify_image(&chain, Bl32Image, &buf[..CONTAINER_HEADER_BYTE_SIZE - 1])
            .unwrap_err()
            .error,
        CotError::PARSER_CONTAINER_TOO_SHORT
    );

    let buf = chain.get(Bl2Image);
    assert_eq!(
        module
            .verify_image(&chain, Bl2Image, &buf[..buf.len() - 1])
            .unwrap_err()
            .error,
        CotError::METHOD_HASH_MISMATCH
    );
}

#[test]
fn test_sibling_key_certs_in_any_order() {
    let (fixture, chain) = setup();
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    assert_eq!(verify(&mut module, &chain, SocFwKeyCert), Ok(()));
    assert_eq!(verify(&mut module, &chain, TrustedOsFwKeyCert), Ok(()));
    assert_eq!(verify(&mut module, &chain, SocFwContentCert), Ok(()));
    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
    assert_eq!(verify(&mut module, &chain, TrustedOsFwContentCert), Ok(()));
    assert_eq!(verify(&mut module, &chain, Bl32Image), Ok(()));

    // Reverse order on a fresh module
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));
    assert_eq!(verify(&mut module, &chain, TrustedOsFwKeyCert), Ok(()));
    assert_eq!(verify(&mut module, &chain, SocFwKeyCert), Ok(()));
    assert_eq!(verify(&mut module, &chain, Bl32Image), Ok(()));
    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
}

#[test]
fn test_authenticated_image_short_circuits() {
    let (fixture, chain) = setup();
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    assert_eq!(verify(&mut module, &chain, Bl31Image), Ok(()));
    let signatures = module.crypto().signatures.get();
    let digests = module.crypto().digests.get();
    let counters = module.storage().values;
    let writes = module.storage().writes;
    assert!(writes > 0);

    // Memoized images are accepted without looking at the buffer
    assert_eq!(module.verify_image(&chain, Bl31Image, b"garbage"), Ok(()));
    assert_eq!(
        module.verify_image(&chain, SocFwContentCert, b"garbage"),
        Ok(())
    );
    assert_eq!(module.crypto().signatures.get(), signatures);
    assert_eq!(module.crypto().digests.get(), digests);
    assert_eq!(module.storage().values, counters);
    assert_eq!(module.storage().writes, writes);
}

#[test]
fn test_cleared_params_fail_closed() {
    let (fixture, chain) = setup();
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    assert_eq!(verify(&mut module, &chain, Bl2Image), Ok(()));
    assert_eq!(verify(&mut module, &chain, TrustedKeyCert), Ok(()));
    module.clear_params();

    assert_eq!(verify(&mut module, &chain, Bl2Image), Ok(()));
    let rejection = verify(&mut module, &chain, SocFwKeyCert).unwrap_err();
    assert_eq!(rejection.error, CotError::PARAM_NOT_PUBLISHED);
}

#[test]
fn test_unknown_image() {
    static ROOT_ONLY: [CotNode<TbbrImageId>; 1] = [CotNode {
        id: TrustedKeyCert,
        format: ImageFormat::Certificate,
        parent: None,
        methods: &[AuthMethodDesc::Signature {
            pk: AuthParamRef::image(&SUBJECT_PK),
            sig: AuthParamRef::image(&SIG),
            alg: AuthParamRef::image(&SIG_ALG),
            data: AuthParamRef::image(&RAW_DATA),
        }],
        authenticated_data: &[],
        nv_ctr: None,
    }];

    let (fixture, chain) = setup();
    let table = CotTable::new(&ROOT_ONLY).unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    assert_eq!(verify(&mut module, &chain, TrustedKeyCert), Ok(()));
    let rejection = verify(&mut module, &chain, Bl2Image).unwrap_err();
    assert_eq!(rejection.error, CotError::IMAGE_UNKNOWN);
    assert_eq!(rejection.kind(), ErrorKind::UnknownImage);
}

#[test]
fn test_unregistered_format() {
    static PLATFORM_ROOT: [CotNode<TbbrImageId>; 1] = [CotNode {
        id: TrustedKeyCert,
        format: ImageFormat::Platform(3),
        parent: None,
        methods: &[AuthMethodDesc::Signature {
            pk: AuthParamRef::image(&SUBJECT_PK),
            sig: AuthParamRef::image(&SIG),
            alg: AuthParamRef::image(&SIG_ALG),
            data: AuthParamRef::image(&RAW_DATA),
        }],
        authenticated_data: &[],
        nv_ctr: None,
    }];

    let fixture = Fixture::default();
    let table = CotTable::new(&PLATFORM_ROOT).unwrap();
    let result = tbbr_auth_module(
        &table,
        CountingCrypto::default(),
        Env::new(&fixture),
        Counters::new(0),
    );
    let err = result.err().unwrap();
    assert_eq!(err, CotError::CONFIG_PARSER_MISSING);
    assert_eq!(err.kind(), ErrorKind::ConfigurationError);
}

#[test]
fn test_every_truncation_fails_closed() {
    let (fixture, chain) = setup();
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    for id in TbbrImageId::ALL {
        let buf = chain.get(id);
        for len in 0..buf.len() {
            assert!(
                module.verify_image(&chain, id, &buf[..len]).is_err(),
                "{id:?} accepted at {len} bytes"
            );
        }
        assert_eq!(module.verify_image(&chain, id, buf), Ok(()));
    }
}

#[test]
fn test_rejection_is_repeatable() {
    let (fixture, mut chain) = setup();
    chain.flip_last(TrustedOsFwContentCert);
    let table = tbbr_table().unwrap();
    let mut module = new_module(&table, Env::new(&fixture), Counters::new(0));

    let first = verify(&mut module, &chain, Bl32Image).unwrap_err();
    let second = verify(&mut module, &chain, Bl32Image).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.failed_at, TrustedOsFwContentCert);
    assert!(module.is_authenticated(TrustedOsFwKeyCert));
    assert_eq!(module.storage().writes, 1);
}
