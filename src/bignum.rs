//! Arbitrary-precision unsigned integers, sized down to what the
//! factorial engine needs.
//!
//! Values are stored as base-10^9 limbs, least significant first. Keeping
//! the limb base a power of ten makes decimal rendering a straight
//! concatenation instead of repeated long division. The only arithmetic
//! operation provided is multiplication by a machine-sized scalar, which
//! is the one operation the incremental factorial needs.

use std::fmt;

/// Base of one limb. Nine decimal digits per limb keeps the per-limb
/// product `limb * k + carry` inside a `u64` for every scalar the engine
/// accepts.
pub const LIMB_BASE: u64 = 1_000_000_000;

/// Decimal digits carried by one limb.
pub const LIMB_DIGITS: usize = 9;

/// Unsigned big integer.
///
/// Invariant: the most significant limb is non-zero, except for the
/// canonical zero, which is the single limb `[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigUint {
    limbs: Vec<u32>,
}

impl BigUint {
    pub fn zero() -> Self {
        BigUint { limbs: vec![0] }
    }

    pub fn one() -> Self {
        BigUint { limbs: vec![1] }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Multiplies in place by a machine scalar, propagating carries in
    /// base 10^9 and appending limbs while the final carry is non-zero.
    pub fn mul_scalar(&mut self, k: u32) {
        if k == 0 {
            self.limbs.clear();
            self.limbs.push(0);
            return;
        }
        if self.is_zero() {
            return;
        }
        let mut carry: u64 = 0;
        for limb in &mut self.limbs {
            let product = u64::from(*limb) * u64::from(k) + carry;
            *limb = (product % LIMB_BASE) as u32;
            carry = product / LIMB_BASE;
        }
        while carry > 0 {
            self.limbs.push((carry % LIMB_BASE) as u32);
            carry /= LIMB_BASE;
        }
    }

    /// Renders the value in decimal: the most significant limb without
    /// padding, every lower limb zero-padded to nine digits.
    pub fn to_decimal(&self) -> String {
        let mut digits = String::with_capacity(self.limbs.len() * LIMB_DIGITS);
        let mut limbs = self.limbs.iter().rev();
        if let Some(top) = limbs.next() {
            digits.push_str(&top.to_string());
        }
        for limb in limbs {
            digits.push_str(&format!("{:09}", limb));
        }
        digits
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
