//! Current account - The logged-in account kept in storage.

use std::sync::Arc;

use domain::AccountModel;

use crate::config::ACCOUNT_STORAGE_KEY;
use crate::data::protocols::{GetStorage, SetStorage, StorageError};

pub struct CurrentAccount {
    getter: Arc<dyn GetStorage>,
    setter: Arc<dyn SetStorage>,
}

impl CurrentAccount {
    pub fn new(getter: Arc<dyn GetStorage>, setter: Arc<dyn SetStorage>) -> Self {
        Self { getter, setter }
    }

    /// Stored account; a stored value that is not an object counts as none
    pub fn get(&self) -> Result<Option<AccountModel>, StorageError> {
        Ok(self
            .getter
            .get(ACCOUNT_STORAGE_KEY)?
            .and_then(AccountModel::from_value))
    }

    pub fn set(&self, account: &AccountModel) -> Result<(), StorageError> {
        self.setter
            .set(ACCOUNT_STORAGE_KEY, Some(account.clone().into_value()))
    }

    /// Logout
    pub fn clear(&self) -> Result<(), StorageError> {
        self.setter.set(ACCOUNT_STORAGE_KEY, None)
    }
}
