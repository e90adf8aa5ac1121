//! Registry persistence port (interface).

use std::collections::BTreeMap;

use crate::domain::PortRecord;
use crate::error::Result;

/// The full port-to-record mapping, ordered by port.
pub type RegistryMap = BTreeMap<u16, PortRecord>;

/// Port for registry persistence.
///
/// The registry is always read and written as a whole.
pub trait RecordStore: Send + Sync {
    /// Load every record.
    ///
    /// A store that has never been written yields an empty map.
    fn load(&self) -> impl std::future::Future<Output = Result<RegistryMap>> + Send;

    /// Replace every record with `records`.
    fn save(&self, records: &RegistryMap) -> impl std::future::Future<Output = Result<()>> + Send;
}
