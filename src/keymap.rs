//! TOML keymap files, mapping key names to scancodes per remote.
//!
//! ```toml
//! [[remote]]
//! name = "tv"
//! protocol = "nec"
//! bits = 32
//!
//! [remote.keys]
//! KEY_POWER = 0x04fb08f7
//! ```

use irproto::Protocol;
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

#[derive(Debug, Deserialize)]
pub struct KeymapFile {
    #[serde(default, rename = "remote")]
    pub remotes: Vec<Remote>,
}

#[derive(Debug, Deserialize)]
pub struct Remote {
    pub name: String,
    pub protocol: Protocol,
    #[serde(default)]
    pub bits: Option<u8>,
    #[serde(default)]
    pub keys: BTreeMap<String, u32>,
}

impl KeymapFile {
    pub fn parse(path: &Path) -> Result<KeymapFile, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;

        KeymapFile::parse_str(&contents).map_err(|e| format!("{}: {}", path.display(), e))
    }

    pub fn parse_str(contents: &str) -> Result<KeymapFile, String> {
        let keymap: KeymapFile = toml::from_str(contents).map_err(|e| e.to_string())?;

        if keymap.remotes.is_empty() {
            return Err("no remotes defined".into());
        }

        for remote in &keymap.remotes {
            if remote.protocol == Protocol::Unknown {
                return Err(format!(
                    "remote {} cannot use the unknown protocol",
                    remote.name
                ));
            }
        }

        Ok(keymap)
    }

    /// Find a key by name; the first remote defining it wins.
    pub fn lookup(&self, key: &str) -> Option<(&Remote, u32)> {
        self.remotes
            .iter()
            .find_map(|remote| remote.keys.get(key).map(|&code| (remote, code)))
    }

    /// Reverse lookup of a decoded value.
    pub fn find_key(&self, protocol: Protocol, value: u32) -> Option<(&Remote, &str)> {
        self.remotes
            .iter()
            .filter(|remote| remote.protocol == protocol)
            .find_map(|remote| {
                remote
                    .keys
                    .iter()
                    .find(|(_, &code)| code == value)
                    .map(|(name, _)| (remote, name.as_str()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYMAP: &str = r#"
[[remote]]
name = "tv"
protocol = "nec"
bits = 32

[remote.keys]
KEY_POWER = 0x04fb08f7
KEY_VOLUMEUP = 0x04fb50af
"#;

    #[test]
    fn parse_and_lookup() {
        let keymap = KeymapFile::parse_str(KEYMAP).unwrap();

        let (remote, code) = keymap.lookup("KEY_POWER").unwrap();
        assert_eq!(remote.name, "tv");
        assert_eq!(remote.protocol, Protocol::Nec);
        assert_eq!(remote.bits, Some(32));
        assert_eq!(code, 0x04fb08f7);

        assert!(keymap.lookup("KEY_MUTE").is_none());
    }

    #[test]
    fn reverse_lookup() {
        let keymap = KeymapFile::parse_str(KEYMAP).unwrap();

        let (_, key) = keymap.find_key(Protocol::Nec, 0x04fb50af).unwrap();
        assert_eq!(key, "KEY_VOLUMEUP");

        assert!(keymap.find_key(Protocol::Sony, 0x04fb50af).is_none());
    }

    #[test]
    fn rejects_bad_keymaps() {
        assert!(KeymapFile::parse_str("").is_err());
        assert!(KeymapFile::parse_str(
            "[[remote]]\nname = \"x\"\nprotocol = \"morse\"\n"
        )
        .is_err());
        assert!(KeymapFile::parse_str(
            "[[remote]]\nname = \"x\"\nprotocol = \"unknown\"\n"
        )
        .is_err());
    }
}
