//! Wallet directory tests against real directories on disk
//!
//! These tests build throwaway wallets with `tempfile` and check how
//! `Wallet` validates them and extracts the TNS aliases.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use adbq_core::AdbqError;
use adbq_core::wallet::{TNSNAMES_FILE, Wallet, parse_tns_aliases};
use proptest::prelude::*;
use std::fs;

const ADB_TNSNAMES: &str = "\
adbquickstart_high = (description= (retry_count=20)(retry_delay=3)(address=(protocol=tcps)(port=1522)(host=adb.eu-frankfurt-1.oraclecloud.com))(connect_data=(service_name=abc_adbquickstart_high.adb.oraclecloud.com))(security=(ssl_server_dn_match=yes)))
adbquickstart_low = (description= (retry_count=20)(retry_delay=3)(address=(protocol=tcps)(port=1522)(host=adb.eu-frankfurt-1.oraclecloud.com))(connect_data=(service_name=abc_adbquickstart_low.adb.oraclecloud.com))(security=(ssl_server_dn_match=yes)))
adbquickstart_medium = (description= (retry_count=20)(retry_delay=3)(address=(protocol=tcps)(port=1522)(host=adb.eu-frankfurt-1.oraclecloud.com))(connect_data=(service_name=abc_adbquickstart_medium.adb.oraclecloud.com))(security=(ssl_server_dn_match=yes)))
";

fn wallet_with(tnsnames: Option<&str>) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    if let Some(content) = tnsnames {
        fs::write(dir.path().join(TNSNAMES_FILE), content).expect("Failed to write tnsnames");
    }
    dir
}

#[test]
fn test_aliases_from_downloaded_wallet() {
    let dir = wallet_with(Some(ADB_TNSNAMES));
    let wallet = Wallet::open(dir.path()).unwrap();

    assert_eq!(
        wallet.aliases().unwrap(),
        vec![
            "adbquickstart_high",
            "adbquickstart_low",
            "adbquickstart_medium"
        ]
    );
}

#[test]
fn test_open_stores_absolute_path() {
    let dir = wallet_with(Some("A=x\n"));
    let wallet = Wallet::open(dir.path()).unwrap();

    assert!(wallet.dir().is_absolute());
    assert_eq!(wallet.tnsnames_path(), wallet.dir().join("tnsnames.ora"));
}

#[test]
fn test_open_rejects_regular_file() {
    let dir = wallet_with(Some("A=x\n"));
    let file = dir.path().join(TNSNAMES_FILE);

    let err = Wallet::open(&file).unwrap_err();
    assert!(matches!(err, AdbqError::InvalidWalletDirectory { .. }));
}

#[test]
fn test_missing_tnsnames() {
    let dir = wallet_with(None);
    let wallet = Wallet::open(dir.path()).unwrap();

    let err = wallet.aliases().unwrap_err();
    assert!(matches!(err, AdbqError::MissingTnsNames { .. }));
}

#[test]
fn test_tnsnames_directory_is_not_a_file() {
    let dir = wallet_with(None);
    fs::create_dir(dir.path().join(TNSNAMES_FILE)).unwrap();
    let wallet = Wallet::open(dir.path()).unwrap();

    assert!(matches!(
        wallet.aliases().unwrap_err(),
        AdbqError::MissingTnsNames { .. }
    ));
}

#[test]
fn test_tnsnames_without_aliases() {
    let dir = wallet_with(Some("# generated wallet, aliases removed\n\n"));
    let wallet = Wallet::open(dir.path()).unwrap();

    let err = wallet.aliases().unwrap_err();
    assert!(matches!(err, AdbqError::NoTnsAliases { .. }));
    assert!(err.to_string().contains("does not contain TNS aliases"));
}

proptest! {
    #[test]
    fn prop_one_alias_per_assignment_line(
        entries in prop::collection::vec(("[a-z][a-z0-9_]{0,15}", "[ -~]{0,30}"), 0..12)
    ) {
        let content: String = entries
            .iter()
            .map(|(alias, descriptor)| format!("{} = {}\n", alias, descriptor))
            .collect();

        let aliases = parse_tns_aliases(&content);
        let expected: Vec<&str> = entries.iter().map(|(alias, _)| alias.as_str()).collect();
        prop_assert_eq!(aliases, expected);
    }

    #[test]
    fn prop_lines_without_equals_are_ignored(lines in prop::collection::vec("[^=\n\r]{0,40}", 0..10)) {
        let content = lines.join("\n");
        prop_assert!(parse_tns_aliases(&content).is_empty());
    }
}
