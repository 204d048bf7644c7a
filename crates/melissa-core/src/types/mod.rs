mod query;
mod record;
mod response;

pub use query::*;
pub use record::*;
pub use response::*;

/// Split a comma-joined code list, skipping blank segments
pub(crate) fn split_codes(joined: &str) -> impl Iterator<Item = &str> {
    joined.split(',').map(str::trim).filter(|code| !code.is_empty())
}
