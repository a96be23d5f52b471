//! Domain model (ids, records, lookup outcomes, errors).

pub mod errors;
pub mod ids;
pub mod lookup;
pub mod record;

pub use self::errors::{ErrorKind, LookupError};
pub use self::ids::{RecordId, RecordIdError, RecordKey, RecordType};
pub use self::lookup::{LookupEvent, LookupOutcome, LookupResult};
pub use self::record::{RecordStatus, StoredRecord};
