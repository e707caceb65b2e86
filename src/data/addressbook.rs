use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use alloy::primitives::Address;

use crate::data::types::KnownAddress;

const BOOK_FILE: &str = "members.json";
const APP_DIR: &str = "team-tui";

/// Addresses that have resolved to a live member record, stored on disk
/// at ~/.config/team-tui/members.json. The contract has no enumeration
/// primitive, so this book is what lets the roster be re-seeded on
/// startup, one fetch per known address.
pub struct AddressBook {
    pub entries: Vec<KnownAddress>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Load the book from disk. Returns an empty book if the file
    /// doesn't exist or doesn't parse.
    pub fn load() -> Self {
        let path = match book_path() {
            Some(p) => p,
            None => return Self::new(),
        };

        let data = match fs::read_to_string(&path) {
            Ok(d) => d,
            Err(_) => return Self::new(),
        };

        let entries: Vec<KnownAddress> = match serde_json::from_str(&data) {
            Ok(e) => e,
            Err(_) => return Self::new(),
        };

        Self { entries }
    }

    /// Save the book to disk.
    pub fn save(&self) -> Result<(), String> {
        let path = book_path().ok_or("Could not determine config directory")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| format!("Failed to serialize address book: {e}"))?;

        fs::write(&path, json).map_err(|e| format!("Failed to write address book: {e}"))?;

        Ok(())
    }

    /// Record an address with the member name it resolved to.
    /// Returns false if the address is already in the book.
    pub fn add(&mut self, address: Address, name: String) -> bool {
        if self.entries.iter().any(|e| e.address == address) {
            return false;
        }

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        self.entries.push(KnownAddress {
            address,
            name,
            added_at: now,
        });

        true
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.entries.iter().any(|e| &e.address == address)
    }

    /// All known addresses, in insertion order.
    pub fn addresses(&self) -> Vec<Address> {
        self.entries.iter().map(|e| e.address).collect()
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the path to the address book file.
fn book_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_DIR).join(BOOK_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_empty() {
        let book = AddressBook::new();
        assert!(book.entries.is_empty());
        assert!(book.addresses().is_empty());
    }

    #[test]
    fn test_add_entry() {
        let mut book = AddressBook::new();
        let addr = Address::from_slice(&[0x01; 20]);
        assert!(book.add(addr, "Alice".to_string()));
        assert_eq!(book.addresses(), vec![addr]);
        assert_eq!(book.entries[0].name, "Alice");
    }

    #[test]
    fn test_add_duplicate() {
        let mut book = AddressBook::new();
        let addr = Address::from_slice(&[0x01; 20]);
        assert!(book.add(addr, "First".to_string()));
        assert!(!book.add(addr, "Second".to_string()));
        assert_eq!(book.entries.len(), 1);
        assert_eq!(book.entries[0].name, "First");
    }

    #[test]
    fn test_contains() {
        let mut book = AddressBook::new();
        let addr = Address::from_slice(&[0x01; 20]);
        assert!(!book.contains(&addr));
        book.add(addr, "Alice".to_string());
        assert!(book.contains(&addr));
    }

    #[test]
    fn test_addresses_preserve_order() {
        let mut book = AddressBook::new();
        let a = Address::from_slice(&[0x01; 20]);
        let b = Address::from_slice(&[0x02; 20]);
        book.add(a, "A".to_string());
        book.add(b, "B".to_string());
        assert_eq!(book.addresses(), vec![a, b]);
    }

    #[test]
    fn test_book_path() {
        let path = book_path();
        // Should return Some on most systems
        if let Some(p) = path {
            assert!(p.to_string_lossy().contains("team-tui"));
            assert!(p.to_string_lossy().contains("members.json"));
        }
    }
}
