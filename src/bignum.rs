//! Fixed-width big-endian unsigned integers for encode/decode.
//! Stands in for a native 128-bit integer: byte-array divmod (encode) and
//! Horner multiply-add (decode), all in place.
//! Overflow discipline: every mutating step has a read-only probe that simulates
//! the carry chain; callers commit only after the probe passes.

use std::fmt;

/// A carry escaped the most-significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("carry out of most-significant byte")
    }
}

impl std::error::Error for Overflow {}

/// Unsigned integer of exactly `N` bytes, index 0 most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedUint<const N: usize>([u8; N]);

impl<const N: usize> Default for FixedUint<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> FixedUint<N> {
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; N])
    }

    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; N] {
        self.0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Long division by `divisor` in place (MSB first); returns the remainder.
    ///
    /// # Panics
    /// If `divisor` is zero.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn div_rem_small(&mut self, divisor: u8) -> u8 {
        assert!(divisor != 0, "division by zero");
        let divisor = u32::from(divisor);
        let mut remainder = 0u32;
        for byte in &mut self.0 {
            let value = (remainder << 8) | u32::from(*byte);
            *byte = (value / divisor) as u8;
            remainder = value % divisor;
        }
        remainder as u8
    }

    /// Would `self * factor` need more than `N` bytes? Does not mutate.
    ///
    /// Fast path: a top byte above `255 / factor` overflows no matter what the
    /// lower bytes carry in. Otherwise the exact carry chain (LSB first) decides.
    #[inline]
    #[must_use]
    pub fn mul_small_overflows(&self, factor: u8) -> bool {
        if N == 0 || factor <= 1 {
            return false;
        }
        if self.0[0] > u8::MAX / factor {
            return true;
        }
        let factor = u32::from(factor);
        let mut carry = 0u32;
        for &byte in self.0.iter().rev() {
            carry = (u32::from(byte) * factor + carry) >> 8;
        }
        carry != 0
    }

    /// Multiplies in place, keeping the low `N` bytes. Probe with
    /// [`Self::mul_small_overflows`] first; an escaping carry is dropped.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn mul_small(&mut self, factor: u8) {
        let factor = u32::from(factor);
        let mut carry = 0u32;
        for byte in self.0.iter_mut().rev() {
            let value = u32::from(*byte) * factor + carry;
            *byte = (value & 0xFF) as u8;
            carry = value >> 8;
        }
    }

    /// Would `self + value` need more than `N` bytes? Does not mutate.
    #[inline]
    #[must_use]
    pub fn add_small_overflows(&self, value: u8) -> bool {
        let mut carry = u32::from(value);
        for &byte in self.0.iter().rev() {
            if carry == 0 {
                break;
            }
            carry = (u32::from(byte) + carry) >> 8;
        }
        carry != 0
    }

    /// Adds in place with carry toward the MSB. Probe with
    /// [`Self::add_small_overflows`] first; an escaping carry is dropped.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_small(&mut self, value: u8) {
        let mut carry = u32::from(value);
        for byte in self.0.iter_mut().rev() {
            if carry == 0 {
                break;
            }
            let sum = u32::from(*byte) + carry;
            *byte = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }
    }

    /// One Horner step, `self = self * factor + value`, probe then commit.
    ///
    /// # Errors
    /// [`Overflow`] if either step would carry out of the top byte. A failed
    /// multiply leaves `self` untouched; a failed add leaves the product.
    #[inline]
    pub fn checked_mul_add(&mut self, factor: u8, value: u8) -> Result<(), Overflow> {
        if self.mul_small_overflows(factor) {
            return Err(Overflow);
        }
        self.mul_small(factor);
        if self.add_small_overflows(value) {
            return Err(Overflow);
        }
        self.add_small(value);
        Ok(())
    }
}

impl<const N: usize> From<[u8; N]> for FixedUint<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl<const N: usize> From<FixedUint<N>> for [u8; N] {
    fn from(value: FixedUint<N>) -> Self {
        value.to_be_bytes()
    }
}
