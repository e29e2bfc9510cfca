use super::helpers::slot_key;
use super::StorageReader;
use crate::generator::Allocation;
use alloy_primitives::{Address, B256, U256};

/// A StorageReader that reads from a generated genesis allocation.
///
/// This lets us verify that the role getters produce the values a live
/// contract would return when reading the pre-populated storage, without
/// needing a running node.
///
/// # Usage
/// ```ignore
/// let alloc = generator.generate_allocation(MARIONETTE_ADDRESS, proxy_admin, &roles)?;
/// let reader = AllocationStorageReader::new(&alloc);
/// assert!(has_role(&reader, MARIONETTE_ADDRESS, IMA_ROLE, ima));
/// ```
pub struct AllocationStorageReader<'a> {
    alloc: &'a Allocation,
}

impl<'a> AllocationStorageReader<'a> {
    /// Create a reader borrowing an allocation.
    pub fn new(alloc: &'a Allocation) -> Self {
        Self { alloc }
    }
}

impl StorageReader for AllocationStorageReader<'_> {
    fn read_storage(&self, address: Address, slot: U256) -> Option<B256> {
        let account = self.alloc.get(&address)?;
        let storage = account.storage.as_ref()?;
        storage.get(&slot_key(slot)).copied()
    }
}
