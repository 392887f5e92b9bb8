//! Defaults applied to search options the host left unset.

pub const DEFAULT_START_POSITION: u64 = 1;
pub const DEFAULT_MAX_RECORDS: u64 = 4;
