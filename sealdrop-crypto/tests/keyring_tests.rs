//! Tests for RSA keypair export/import in SPKI and PKCS#8 formats.

use sealdrop_crypto::keyring::{
    ShareKeyPair, export_private_key, export_public_key, generate_keypair, import_private_key,
    import_public_key,
};
use sealdrop_crypto::{
    CryptoError, export_private_key_base64, export_public_key_base64, generate_key,
    import_private_key_base64, import_public_key_base64, unwrap_key, wrap_key,
};

#[test]
fn public_key_der_roundtrip() {
    let kp = generate_keypair().unwrap();
    let der = export_public_key(&kp.public).unwrap();
    let imported = import_public_key(&der).unwrap();
    assert_eq!(imported, kp.public);
}

#[test]
fn private_key_der_roundtrip() {
    let kp = generate_keypair().unwrap();
    let der = export_private_key(&kp.private).unwrap();
    let imported = import_private_key(&der).unwrap();
    assert_eq!(export_private_key(&imported).unwrap(), der);
}

#[test]
fn keypair_from_private_der_recovers_public_half() {
    let kp = generate_keypair().unwrap();
    let der = export_private_key(&kp.private).unwrap();

    let restored = ShareKeyPair::from_private_key_der(&der).unwrap();
    assert_eq!(restored.public, kp.public);
}

#[test]
fn base64_exports_roundtrip_through_wrap() {
    // Directory-format public key and caller-storage private key must
    // interoperate with wrap/unwrap after a text round trip.
    let kp = generate_keypair().unwrap();
    let key = generate_key().unwrap();

    let public = import_public_key_base64(&export_public_key_base64(&kp.public).unwrap()).unwrap();
    let private =
        import_private_key_base64(&export_private_key_base64(&kp.private).unwrap()).unwrap();

    let wrapped = wrap_key(&key, &public).unwrap();
    let recovered = unwrap_key(&wrapped, &private).unwrap();
    assert_eq!(recovered.to_bytes(), key.to_bytes());
}

#[test]
fn malformed_der_rejected() {
    let err = import_public_key(&[0x30, 0x82, 0x01]).unwrap_err();
    assert!(matches!(err, CryptoError::InvalidKeyEncoding(_)));

    let err = import_private_key(b"not der at all").unwrap_err();
    assert!(matches!(err, CryptoError::InvalidKeyEncoding(_)));
}

#[test]
fn public_der_is_not_a_private_key() {
    let kp = generate_keypair().unwrap();
    let spki = export_public_key(&kp.public).unwrap();

    assert!(import_private_key(&spki).is_err());
}

#[test]
fn malformed_base64_rejected_before_parsing() {
    let err = import_public_key_base64("%%%not-base64%%%").unwrap_err();
    assert!(matches!(err, CryptoError::InvalidEncoding(_)));
}

#[test]
fn valid_base64_invalid_der_rejected() {
    let err = import_public_key_base64("aGVsbG8gd29ybGQ=").unwrap_err();
    assert!(matches!(err, CryptoError::InvalidKeyEncoding(_)));
}
