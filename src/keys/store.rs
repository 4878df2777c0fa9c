//! Key pair persistence as PEM files.

use super::{KeyPair, PrivateKey, PublicKey};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Locations of the key files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// Private key PEM path.
    pub private_key: PathBuf,
    /// Public key PEM path.
    pub public_key: PathBuf,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            private_key: PathBuf::from("private_key.pem"),
            public_key: PathBuf::from("public_key.pem"),
        }
    }
}

/// Reads and writes a key pair on disk.
#[derive(Debug, Clone)]
pub struct KeyStore {
    private_path: PathBuf,
    public_path: PathBuf,
}

impl KeyStore {
    pub fn new(private_path: impl Into<PathBuf>, public_path: impl Into<PathBuf>) -> Self {
        Self {
            private_path: private_path.into(),
            public_path: public_path.into(),
        }
    }

    pub fn from_config(config: &KeyConfig) -> Self {
        Self::new(&config.private_key, &config.public_key)
    }

    pub fn private_path(&self) -> &Path {
        &self.private_path
    }

    pub fn public_path(&self) -> &Path {
        &self.public_path
    }

    /// Returns true only when both key files are present.
    pub fn exists(&self) -> bool {
        self.private_path.exists() && self.public_path.exists()
    }

    /// Writes both halves, replacing any existing files.
    ///
    /// On Unix the private key file is readable by its owner only.
    pub fn save(&self, pair: &KeyPair) -> Result<()> {
        let private_pem = pair.private().to_pem()?;
        let public_pem = pair.public().to_pem()?;

        write_private(&self.private_path, private_pem.as_bytes())?;
        std::fs::write(&self.public_path, public_pem.as_bytes())
            .map_err(|e| Error::io(&self.public_path, e))?;

        tracing::info!(
            private = %self.private_path.display(),
            public = %self.public_path.display(),
            "Saved RSA key pair"
        );
        Ok(())
    }

    pub fn load_private(&self) -> Result<PrivateKey> {
        load_private_key(&self.private_path)
    }

    pub fn load_public(&self) -> Result<PublicKey> {
        load_public_key(&self.public_path)
    }

    /// Loads both halves and checks that they match.
    pub fn load(&self) -> Result<KeyPair> {
        KeyPair::from_parts(self.load_public()?, self.load_private()?)
    }

    /// Loads the stored pair, or generates and saves one if either file is missing.
    pub fn load_or_generate<F>(&self, generate: F) -> Result<KeyPair>
    where
        F: FnOnce() -> Result<KeyPair>,
    {
        if self.exists() {
            tracing::info!("RSA key pair already exists, using existing keys");
            return self.load();
        }

        let pair = generate()?;
        self.save(&pair)?;
        tracing::info!("Generated new RSA key pair and saved to files");
        Ok(pair)
    }
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

/// Reads a PEM private key from disk.
pub fn load_private_key(path: impl AsRef<Path>) -> Result<PrivateKey> {
    let path = path.as_ref();
    let pem = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    PrivateKey::from_pem(&pem)
}

/// Reads a PEM public key from disk.
pub fn load_public_key(path: impl AsRef<Path>) -> Result<PublicKey> {
    let path = path.as_ref();
    let pem = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    PublicKey::from_pem(&pem)
}

fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(|e| Error::io(path, e))?;

    // The open mode only applies on creation; tighten an existing file too.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(|e| Error::io(path, e))?;
    }

    file.write_all(contents).map_err(|e| Error::io(path, e))
}
