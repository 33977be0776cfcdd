//! Wildcard matching of identity fields
use crate::prelude::{Constellation, SV};

/// PRN value that matches any satellite number
pub const ANY_PRN: u8 = 0;

/// Identity fields that may carry a distinguished "any" sentinel.
/// Wildcards only exist in queries and edit filters, stored
/// identities are always concrete.
pub trait Wildcard: PartialEq {
    /// Returns true if self contains a wildcard value (or is one).
    fn is_wildcard(&self) -> bool;

    /// Returns true if `self` (the query) matches the `stored` value.
    /// A wildcard matches any concrete value, a concrete value
    /// must match exactly.
    fn matches(&self, stored: &Self) -> bool {
        self.is_wildcard() || self == stored
    }
}

impl Wildcard for Constellation {
    fn is_wildcard(&self) -> bool {
        *self == Constellation::Mixed
    }
}

impl Wildcard for SV {
    fn is_wildcard(&self) -> bool {
        self.prn == ANY_PRN || self.constellation.is_wildcard()
    }
    fn matches(&self, stored: &Self) -> bool {
        let prn = self.prn == ANY_PRN || self.prn == stored.prn;
        prn && self.constellation.matches(&stored.constellation)
    }
}
