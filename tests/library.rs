use sealpack::cli::{open_file, seal_files, OpenOptions, SealOptions};
use sealpack::{build_archive, open, seal, SealKey, SealedBlob, SealpackError, NONCE_SIZE};
use std::error::Error;
use std::fs;
use std::io::{Cursor, Read};
use tempfile::tempdir;
use zip::ZipArchive;

const KEY: &[u8; 32] = b"01234567890123456789012345678901";

#[test]
fn archive_then_seal_then_open_recovers_files() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("f1.txt");
    fs::write(&input, b"hello")?;

    let archive = build_archive(&[&input])?;
    let sealed = seal(KEY, &archive)?;
    let recovered = open(KEY, &sealed)?;
    assert_eq!(recovered, archive);

    let mut zip = ZipArchive::new(Cursor::new(recovered))?;
    let mut content = String::new();
    zip.by_name(input.to_str().ok_or("non-UTF-8 temp path")?)?
        .read_to_string(&mut content)?;
    assert_eq!(content, "hello");

    Ok(())
}

#[test]
fn file_level_roundtrip_via_public_api() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let first = dir.path().join("first.bin");
    let second = dir.path().join("second.bin");
    let sealed = dir.path().join("vault.aes");
    let recovered = dir.path().join("vault.zip");

    fs::write(&first, vec![0xA5u8; 4096])?;
    fs::write(&second, b"second payload")?;

    let key = SealKey::from_passphrase(std::str::from_utf8(KEY)?)?;
    let summary = seal_files(
        &[first.clone(), second.clone()],
        &sealed,
        &SealOptions { key: key.clone() },
    )?;
    assert_eq!(summary.entries, 2);

    let written = open_file(&sealed, &recovered, &OpenOptions { key })?;
    assert_eq!(written, summary.archive_bytes);

    let zip = ZipArchive::new(Cursor::new(fs::read(&recovered)?))?;
    let names: Vec<&str> = zip.file_names().collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&first.to_str().ok_or("non-UTF-8 temp path")?));

    Ok(())
}

#[test]
fn sealed_blob_layout_is_nonce_then_aead_output() -> Result<(), Box<dyn Error>> {
    let sealed = seal(KEY, b"layout check")?;
    let blob = SealedBlob::parse(&sealed)?;

    assert_eq!(&blob.nonce()[..], &sealed[..NONCE_SIZE]);
    assert_eq!(blob.ciphertext_with_tag(), &sealed[NONCE_SIZE..]);
    assert_eq!(blob.ciphertext().map(<[u8]>::len), Some(b"layout check".len()));

    Ok(())
}

#[test]
fn nonces_differ_across_calls() -> Result<(), Box<dyn Error>> {
    let nonces: Vec<Vec<u8>> = (0..32)
        .map(|_| seal(KEY, b"same").map(|s| s[..NONCE_SIZE].to_vec()))
        .collect::<Result<_, _>>()?;

    for (i, a) in nonces.iter().enumerate() {
        for b in &nonces[i + 1..] {
            assert_ne!(a, b, "nonce reused across seal calls");
        }
    }

    Ok(())
}

#[test]
fn error_taxonomy_is_distinct() {
    let sealed = seal(KEY, b"data").expect("seal should succeed");

    assert!(matches!(seal(&KEY[..31], b"data"), Err(SealpackError::InvalidKey(31))));
    assert!(matches!(
        open(KEY, &sealed[..NONCE_SIZE - 1]),
        Err(SealpackError::MalformedInput(11))
    ));
    assert!(matches!(
        open(b"abcdefghijabcdefghijabcdefghijab", &sealed),
        Err(SealpackError::AuthenticationFailed)
    ));
}
