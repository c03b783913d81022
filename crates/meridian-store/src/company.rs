//! # Company Info Store
//!
//! Single-record store for the company details shown on receipts. Reads fall
//! back to the default record (empty fields, default thanks message) when
//! nothing has been configured yet.

use meridian_core::CompanyInfo;
use tracing::info;

use crate::blob::{BlobStore, COMPANY};
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct CompanyStore {
    blob: BlobStore,
}

impl CompanyStore {
    pub fn new(blob: BlobStore) -> Self {
        CompanyStore { blob }
    }

    /// Current company info, or the default record when unset.
    pub fn get(&self) -> CompanyInfo {
        self.blob.read(COMPANY)
    }

    /// Replaces the company record.
    pub fn set(&self, info: &CompanyInfo) -> StoreResult<()> {
        self.blob.write(COMPANY, info)?;
        info!(name = %info.name, "company info updated");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::DEFAULT_THANKS_MESSAGE;

    #[test]
    fn test_unset_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = CompanyStore::new(BlobStore::new(dir.path()));

        let info = store.get();
        assert!(info.name.is_empty());
        assert_eq!(info.thanks_message, DEFAULT_THANKS_MESSAGE);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = CompanyStore::new(BlobStore::new(dir.path()));

        let mut info = CompanyInfo::default();
        info.name = "Corner Store".to_string();
        info.telephone = "555-0100".to_string();
        store.set(&info).unwrap();

        let loaded = store.get();
        assert_eq!(loaded.name, "Corner Store");
        assert_eq!(loaded.telephone, "555-0100");
    }
}
