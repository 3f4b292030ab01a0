//! IPv4 address ranges and CIDR notation parsing.
//!
//! Provides [`AddressRange`], a half-open interval of the IPv4 address space,
//! along with the block-size helper used to build one from CIDR text.

use crate::error::{CidrError, Result};
use crate::processing::decompose;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Maximum prefix length accepted on an IPv6 literal before it is rejected
/// as the wrong address family.
const MAX_LENGTH_V6: u8 = 128;

/// One past the last IPv4 address, i.e. the `stop` of `0.0.0.0/0`.
pub const ADDRESS_SPACE_END: u64 = 1 << MAX_LENGTH;

lazy_static! {
    // Unsigned decimal without leading zeros.
    static ref PREFIX_LEN: Regex = Regex::new(r"^(0|[1-9][0-9]{0,2})$").expect("Invalid Regex?");
}

/// Number of addresses in a block with prefix length `len`.
pub fn block_size(len: u8) -> u64 {
    assert!(
        len <= MAX_LENGTH,
        "prefix length {len} > {MAX_LENGTH} should never happen."
    );
    1u64 << (MAX_LENGTH - len)
}

/// Half-open interval `[start, stop)` of the IPv4 address space.
///
/// Bounds are held as `u64` so that `stop` can reach 2^32 for `0.0.0.0/0`.
/// A range is either a single CIDR block or a merged run of blocks; it is
/// never empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: u64,
    stop: u64,
}

impl AddressRange {
    pub(crate) fn new(start: u64, stop: u64) -> AddressRange {
        assert!(
            start < stop && stop <= ADDRESS_SPACE_END,
            "range [{start}, {stop}) is empty or out of bounds"
        );
        AddressRange { start, stop }
    }

    /// Parse `a.b.c.d/n` into the block it names.
    ///
    /// Host bits below the prefix are masked off, so `10.0.0.7/24` yields the
    /// same range as `10.0.0.0/24`.
    pub fn parse(cidr: &str) -> Result<AddressRange> {
        let (addr_str, len_str) = cidr
            .rsplit_once('/')
            .ok_or_else(|| CidrError::parse(cidr, "no '/'"))?;

        let addr: IpAddr = addr_str
            .parse()
            .map_err(|_| CidrError::parse(cidr, format!("invalid address {addr_str:?}")))?;

        if !PREFIX_LEN.is_match(len_str) {
            return Err(CidrError::parse(
                cidr,
                format!("bad bits after slash: {len_str:?}"),
            ));
        }
        let len: u8 = len_str.parse().map_err(|_| {
            CidrError::parse(cidr, format!("prefix length {len_str} out of range"))
        })?;

        let addr = match addr {
            IpAddr::V4(addr) => addr,
            IpAddr::V6(_) if len > MAX_LENGTH_V6 => {
                return Err(CidrError::parse(
                    cidr,
                    format!("prefix length {len} out of range"),
                ));
            }
            IpAddr::V6(_) => {
                return Err(CidrError::AddressFamily {
                    input: cidr.to_string(),
                })
            }
        };

        if len > MAX_LENGTH {
            return Err(CidrError::parse(
                cidr,
                format!("prefix length {len} out of range"),
            ));
        }
        // Shifting by 32 (a /0) overflows; the whole mask is zero then.
        let mask = u32::MAX
            .checked_shl(u32::from(MAX_LENGTH - len))
            .unwrap_or(0);
        let start = (u32::from(addr) & mask) as u64;

        Ok(AddressRange::new(start, start + block_size(len)))
    }

    /// First address as an integer.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// One past the last address as an integer (may be 2^32).
    pub fn stop(&self) -> u64 {
        self.stop
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        self.stop - self.start
    }

    /// Lowest address in the range.
    pub fn first(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.start as u32)
    }

    /// Highest address in the range.
    pub fn last(&self) -> Ipv4Addr {
        Ipv4Addr::from((self.stop - 1) as u32)
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let addr = u32::from(addr) as u64;
        self.start <= addr && addr < self.stop
    }

    /// Minimal ascending list of CIDR blocks covering exactly this range.
    pub fn cidrs(&self) -> Vec<String> {
        decompose(self)
    }
}

impl FromStr for AddressRange {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self> {
        AddressRange::parse(s)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.first(), self.last())
    }
}
