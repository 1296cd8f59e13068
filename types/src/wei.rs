//! Arbitrary-precision wei amounts.
//!
//! All reward arithmetic runs in wei (1 UR = 10^18 wei). Totals grow without
//! bound over the life of the chain, so amounts are `BigUint`-backed rather
//! than machine-width integers. Division truncates toward zero everywhere.

use crate::error::TypeError;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// Decimal places between one UR and one wei.
const UR_DECIMALS: u32 = 18;

/// A non-negative wei amount of unbounded size.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wei(BigUint);

impl Wei {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn from_u64(raw: u64) -> Self {
        Self(BigUint::from(raw))
    }

    pub fn from_u128(raw: u128) -> Self {
        Self(BigUint::from(raw))
    }

    /// One UR in wei: 10^18.
    pub fn ether() -> Self {
        Self(BigUint::from(10u32).pow(UR_DECIMALS))
    }

    /// A whole number of UR, in wei.
    pub fn from_ur(ur: u64) -> Self {
        Self(BigUint::from(ur) * BigUint::from(10u32).pow(UR_DECIMALS))
    }

    pub fn raw(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtraction that returns `None` instead of underflowing.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.0 < other.0 {
            None
        } else {
            Some(Self(&self.0 - &other.0))
        }
    }

    /// Scale by a percentage factor: `⌊v·f / 100⌋`.
    pub fn scale(&self, factor: u32) -> Self {
        Self(&self.0 * BigUint::from(factor) / BigUint::from(100u32))
    }

    /// Truncating division. Returns `None` when `divisor` is zero.
    pub fn div_floor(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &divisor.0))
        }
    }
}

impl Default for Wei {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Wei {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Wei> for &Wei {
    type Output = Wei;
    fn add(self, rhs: &Wei) -> Wei {
        Wei(&self.0 + &rhs.0)
    }
}

impl AddAssign<&Wei> for Wei {
    fn add_assign(&mut self, rhs: &Wei) {
        self.0 += &rhs.0;
    }
}

impl Sub<&Wei> for &Wei {
    type Output = Wei;
    fn sub(self, rhs: &Wei) -> Wei {
        Wei(&self.0 - &rhs.0)
    }
}

impl Mul<u64> for &Wei {
    type Output = Wei;
    fn mul(self, rhs: u64) -> Wei {
        Wei(&self.0 * BigUint::from(rhs))
    }
}

impl Div<u64> for &Wei {
    type Output = Wei;
    fn div(self, rhs: u64) -> Wei {
        Wei(&self.0 / BigUint::from(rhs))
    }
}

impl fmt::Debug for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wei({})", self.0)
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a decimal UR numeral (e.g. `"60.60"`) to wei.
///
/// The conversion is exact integer arithmetic: the integral part is scaled by
/// 10^18 and the fractional digits by 10^(18 − len). More than 18 fractional
/// digits, signs, exponents or empty input are rejected.
pub fn ur_to_wei(s: &str) -> Result<Wei, TypeError> {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(TypeError::InvalidAmount(s.to_string()));
    }
    if frac_part.len() > UR_DECIMALS as usize {
        return Err(TypeError::InvalidAmount(s.to_string()));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(TypeError::InvalidAmount(s.to_string()));
    }

    let mut wei = if int_part.is_empty() {
        BigUint::zero()
    } else {
        int_part
            .parse::<BigUint>()
            .map_err(|_| TypeError::InvalidAmount(s.to_string()))?
            * BigUint::from(10u32).pow(UR_DECIMALS)
    };
    if !frac_part.is_empty() {
        let frac: BigUint = frac_part
            .parse()
            .map_err(|_| TypeError::InvalidAmount(s.to_string()))?;
        wei += frac * BigUint::from(10u32).pow(UR_DECIMALS - frac_part.len() as u32);
    }
    Ok(Wei(wei))
}
