use std::fs;
use std::path::Path;

use alloy::signers::local::PrivateKeySigner;
use color_eyre::eyre::{Result, WrapErr, eyre};

/// Resolve the signing key from configuration: an inline hex key wins,
/// then a key file. Returns None when neither is configured, which
/// leaves the tool in read-only mode.
pub fn load_signer(
    private_key: Option<&str>,
    key_file: Option<&Path>,
) -> Result<Option<PrivateKeySigner>> {
    if let Some(key) = private_key {
        let signer = parse_key(key)?;
        return Ok(Some(signer));
    }

    if let Some(path) = key_file {
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read key file {}", path.display()))?;
        let signer = parse_key(&raw)?;
        return Ok(Some(signer));
    }

    Ok(None)
}

fn parse_key(raw: &str) -> Result<PrivateKeySigner> {
    raw.trim()
        .parse::<PrivateKeySigner>()
        .map_err(|e| eyre!("Invalid private key: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The first well-known anvil/hardhat development key.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_no_key_configured() {
        let signer = load_signer(None, None).unwrap();
        assert!(signer.is_none());
    }

    #[test]
    fn test_inline_key() {
        let signer = load_signer(Some(DEV_KEY), None).unwrap();
        assert!(signer.is_some());
    }

    #[test]
    fn test_inline_key_without_prefix() {
        let signer = load_signer(Some(&DEV_KEY[2..]), None).unwrap();
        assert!(signer.is_some());
    }

    #[test]
    fn test_invalid_key_rejected() {
        assert!(load_signer(Some("not-a-key"), None).is_err());
    }

    #[test]
    fn test_key_file() {
        let path = "/tmp/team-tui-test-key";
        fs::write(path, format!("{DEV_KEY}\n")).unwrap();

        let signer = load_signer(None, Some(Path::new(path))).unwrap();
        assert!(signer.is_some());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_key_file() {
        let result = load_signer(None, Some(Path::new("/tmp/team-tui-no-such-file")));
        assert!(result.is_err());
    }

    #[test]
    fn test_inline_key_wins_over_file() {
        let signer = load_signer(Some(DEV_KEY), Some(Path::new("/tmp/team-tui-no-such-file")));
        assert!(signer.unwrap().is_some());
    }
}
