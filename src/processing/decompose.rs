//! CIDR decomposition.
//!
//! Turns an arbitrary [`AddressRange`] back into the shortest list of
//! aligned CIDR blocks that covers it exactly.

use crate::models::{AddressRange, ADDRESS_SPACE_END, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Size of the largest block that has `addr` as its network address.
///
/// Address 0 is aligned to every block size, including the whole space.
fn natural_block(addr: u64) -> u64 {
    if addr == 0 {
        ADDRESS_SPACE_END
    } else {
        1 << addr.trailing_zeros()
    }
}

/// Format a block of `size` addresses at `start` as CIDR text.
fn to_cidr(start: u64, size: u64) -> String {
    assert!(
        size.is_power_of_two() && start + size <= ADDRESS_SPACE_END,
        "block {start}+{size} is not a CIDR block"
    );
    let len = MAX_LENGTH - size.trailing_zeros() as u8;
    format!("{}/{}", Ipv4Addr::from(start as u32), len)
}

/// Split `range` into the minimal ascending list of CIDR blocks.
///
/// Greedy: at each cursor take the biggest block the cursor is aligned to,
/// halving it until it no longer overruns the end of the range.
pub fn decompose(range: &AddressRange) -> Vec<String> {
    let stop = range.stop();
    let mut cur = range.start();
    let mut cidrs = Vec::new();

    while cur < stop {
        let mut size = natural_block(cur);
        while cur + size > stop {
            size >>= 1;
        }
        cidrs.push(to_cidr(cur, size));
        cur += size;
    }

    log::trace!("decompose({range}) -> {} block(s)", cidrs.len());
    cidrs
}
