//! Sets of IPv4 addresses as collections of ranges.

use super::AddressRange;
use crate::error::Result;
use crate::processing::{sweep, Polarity};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// An immutable set of IPv4 addresses.
///
/// When `canonical` is set the ranges are sorted, disjoint and never
/// adjacent. Otherwise they may be in any order and overlap. Every operation
/// returns a new set and leaves its operands untouched; clones share the
/// range list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Arc<[AddressRange]>,
    canonical: bool,
}

impl RangeSet {
    /// The empty set.
    pub fn empty() -> RangeSet {
        RangeSet {
            ranges: Arc::from(Vec::new()),
            canonical: true,
        }
    }

    fn from_ranges(ranges: Vec<AddressRange>, canonical: bool) -> RangeSet {
        RangeSet {
            ranges: ranges.into(),
            canonical,
        }
    }

    /// Parse a batch of CIDR strings, failing on the first bad one.
    ///
    /// Fewer than two blocks are trivially canonical; anything more is left
    /// for [`RangeSet::simplify`] to merge.
    pub fn from_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<RangeSet> {
        let ranges = cidrs
            .iter()
            .map(|cidr| AddressRange::parse(cidr.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("from_cidrs: parsed {} block(s)", ranges.len());
        Ok(RangeSet::from_ranges(ranges, cidrs.len() < 2))
    }

    /// All addresses in `self` or `other`.
    ///
    /// Lazy: the range lists are concatenated (`self` first) and the result
    /// is not canonical until simplified.
    pub fn union(&self, other: &RangeSet) -> RangeSet {
        let ranges = self.ranges.iter().chain(other.ranges.iter()).copied();
        RangeSet::from_ranges(ranges.collect(), false)
    }

    /// Canonical form of this set. Already canonical sets are returned as is.
    pub fn simplify(&self) -> RangeSet {
        if self.canonical {
            return self.clone();
        }
        let ranges = sweep([(&self.ranges[..], Polarity::Positive)]);
        log::debug!(
            "simplify: {} range(s) -> {}",
            self.ranges.len(),
            ranges.len()
        );
        RangeSet::from_ranges(ranges, true)
    }

    /// All addresses in `self` that are not in `other`. Always canonical.
    ///
    /// `other` does not need to be simplified first.
    pub fn subtract(&self, other: &RangeSet) -> RangeSet {
        let minuend = self.simplify();
        let ranges = sweep([
            (&minuend.ranges[..], Polarity::Positive),
            (&other.ranges[..], Polarity::Negated),
        ]);
        log::debug!(
            "subtract: {} - {} range(s) -> {}",
            minuend.ranges.len(),
            other.ranges.len(),
            ranges.len()
        );
        RangeSet::from_ranges(ranges, true)
    }

    /// CIDR blocks of every range, in list order.
    ///
    /// Minimal only for a canonical set; otherwise blocks may overlap.
    pub fn to_cidrs(&self) -> Vec<String> {
        self.ranges.iter().flat_map(|r| r.cidrs()).collect()
    }

    pub fn ranges(&self) -> &[AddressRange] {
        &self.ranges
    }

    pub fn is_canonical(&self) -> bool {
        self.canonical
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.ranges.iter().any(|r| r.contains(addr))
    }

    /// Sum of the range sizes. Overlaps count twice unless canonical.
    pub fn address_count(&self) -> u64 {
        self.ranges.iter().map(|r| r.size()).sum()
    }
}

impl Default for RangeSet {
    fn default() -> Self {
        RangeSet::empty()
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_cidrs().join(","))
    }
}

impl Serialize for RangeSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.to_cidrs().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RangeSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<RangeSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cidrs = Vec::<String>::deserialize(deserializer)?;
        RangeSet::from_cidrs(cidrs.as_slice()).map_err(de::Error::custom)
    }
}
