//! Helpers shared by the Discord type layer.

mod code;

pub use self::code::{UnknownCodeError, UnknownCodeErrorType};

/// `skip_serializing_if` predicate: Discord treats an absent boolean as
/// `false`, so `false` fields are left out of the payload.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !value
}
