// ============================================================================
// Arbitrary-Precision Decimal
// Exact fixed-point arithmetic on (unscaled integer, scale) pairs
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by division results by default.
pub const DEFAULT_DIVISION_SCALE: usize = 12;

/// Default cap on the total significant digits shown on a display.
pub const DEFAULT_MAX_SIGNIFICANT: usize = 12;

/// Arbitrary-precision decimal number.
///
/// Internally stores `unscaled × 10^-scale`, where `unscaled` is a signed
/// big integer and `scale` counts fractional digits. Values are immutable;
/// every operation produces a new value, so `0.1 + 0.2` is exactly `0.3`
/// with no binary floating-point artifact.
///
/// # Example
/// ```
/// use pocketcalc::numeric::Decimal;
///
/// let a: Decimal = "0.1".parse().unwrap();
/// let b: Decimal = "0.2".parse().unwrap();
/// assert_eq!(a.add(&b).to_string(), "0.3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    unscaled: BigInt,
    scale: usize,
}

/// Compute 10^n as a big integer.
fn pow10(n: usize) -> BigInt {
    let ten = BigInt::from(10);
    let mut result = BigInt::one();
    for _ in 0..n {
        result *= &ten;
    }
    result
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero.
    pub fn zero() -> Self {
        Self {
            unscaled: BigInt::zero(),
            scale: 0,
        }
    }

    /// Create from an unscaled integer and a scale.
    ///
    /// The resulting value is `unscaled × 10^-scale`.
    pub fn from_unscaled(unscaled: BigInt, scale: usize) -> Self {
        Self { unscaled, scale }
    }

    /// Create from an integer value (scale 0).
    pub fn from_integer(value: i64) -> Self {
        Self {
            unscaled: BigInt::from(value),
            scale: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled integer coefficient.
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The number of fractional digits.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Check if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Check if the value is negative.
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Digits in the integer part; 0 when the magnitude is below 1.
    fn integer_digit_count(&self) -> usize {
        let int_part = self.unscaled.abs() / pow10(self.scale);
        if int_part.is_zero() {
            0
        } else {
            int_part.to_string().len()
        }
    }

    // ========================================================================
    // Canonicalization
    // ========================================================================

    /// Strip trailing fractional zeros.
    ///
    /// A zero value collapses to scale 0, so `-0` and `0.000` both become
    /// plain `0`.
    pub fn normalized(&self) -> Self {
        let ten = BigInt::from(10);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > 0 && (&unscaled % &ten).is_zero() {
            unscaled /= &ten;
            scale -= 1;
        }
        Self { unscaled, scale }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Rescale both operands to the larger of the two scales.
    fn align(&self, other: &Self) -> (BigInt, BigInt, usize) {
        match self.scale.cmp(&other.scale) {
            std::cmp::Ordering::Equal => {
                (self.unscaled.clone(), other.unscaled.clone(), self.scale)
            }
            std::cmp::Ordering::Greater => {
                let diff = self.scale - other.scale;
                (
                    self.unscaled.clone(),
                    &other.unscaled * pow10(diff),
                    self.scale,
                )
            }
            std::cmp::Ordering::Less => {
                let diff = other.scale - self.scale;
                (
                    &self.unscaled * pow10(diff),
                    other.unscaled.clone(),
                    other.scale,
                )
            }
        }
    }

    /// Exact addition. Result scale is the larger of the two input scales.
    pub fn add(&self, rhs: &Self) -> Self {
        let (a, b, scale) = self.align(rhs);
        Self {
            unscaled: a + b,
            scale,
        }
    }

    /// Exact subtraction. Result scale is the larger of the two input scales.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (a, b, scale) = self.align(rhs);
        Self {
            unscaled: a - b,
            scale,
        }
    }

    /// Exact multiplication. Result scale is the sum of the input scales.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self {
            unscaled: &self.unscaled * &rhs.unscaled,
            scale: self.scale + rhs.scale,
        }
    }

    /// Division producing a result with the requested scale.
    ///
    /// The sign is factored out before rounding and the quotient rounds
    /// half-up on the magnitude: if twice the remainder reaches the divisor,
    /// the magnitude is incremented. So `5 / 2` at scale 0 is `3` and
    /// `-5 / 2` at scale 0 is `-3`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is zero.
    pub fn div(&self, rhs: &Self, scale: usize) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let negative = self.is_negative() != rhs.is_negative();
        let a = self.unscaled.abs();
        let b = rhs.unscaled.abs();

        // a/b = A × 10^(bS - aS) / B; shift so the quotient lands on the
        // requested output scale.
        let exp = rhs.scale as i64 - self.scale as i64 + scale as i64;
        let (numerator, denominator) = if exp >= 0 {
            (a * pow10(exp as usize), b)
        } else {
            (a, b * pow10((-exp) as usize))
        };

        let mut quotient = &numerator / &denominator;
        let remainder = &numerator % &denominator;
        if remainder * BigInt::from(2) >= denominator {
            quotient += BigInt::one();
        }

        Ok(Self {
            unscaled: if negative { -quotient } else { quotient },
            scale,
        })
    }

    /// Round half-up on the magnitude to the given number of fractional
    /// digits. A smaller current scale pads with zeros instead.
    pub fn round_to_scale(&self, scale: usize) -> Self {
        if self.scale == scale {
            return self.clone();
        }
        if self.scale < scale {
            let diff = scale - self.scale;
            return Self {
                unscaled: &self.unscaled * pow10(diff),
                scale,
            };
        }

        let divisor = pow10(self.scale - scale);
        let negative = self.is_negative();
        let magnitude = self.unscaled.abs();
        let mut quotient = &magnitude / &divisor;
        let remainder = &magnitude % &divisor;
        if remainder * BigInt::from(2) >= divisor {
            quotient += BigInt::one();
        }

        Self {
            unscaled: if negative { -quotient } else { quotient },
            scale,
        }
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            unscaled: -self.unscaled,
            scale: self.scale,
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Decimal {
    /// Plain decimal string with exactly `scale` fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let mut digits = self.unscaled.magnitude().to_string();

        if self.scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        // Pad so at least one digit lands before the decimal point.
        if digits.len() <= self.scale {
            let zeros = "0".repeat(self.scale - digits.len() + 1);
            digits = format!("{}{}", zeros, digits);
        }
        let split = digits.len() - self.scale;
        write!(f, "{}{}.{}", sign, &digits[..split], &digits[split..])
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse from a decimal string by pure character scanning.
    ///
    /// Accepts an optional sign, an optional decimal point, and an absent
    /// integer part (`".5"`) or fractional part (`"3."`); the scale is the
    /// count of fractional digits, so `"0.50"` parses at scale 2.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_str, frac_str) = match s.find('.') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::InvalidInput);
        }

        let digits = format!("{}{}", int_str, frac_str);
        let unscaled = digits
            .parse::<BigInt>()
            .map_err(|_| NumericError::InvalidInput)?;

        Ok(Self {
            unscaled: if negative { -unscaled } else { unscaled },
            scale: frac_str.len(),
        })
    }
}

// ============================================================================
// String-Level Operations
// ============================================================================
//
// The calculator state machine stores values as decimal strings; these
// helpers parse, compute, and re-normalize in one step. Results are always
// canonical: no trailing fractional zeros, no negative zero.

/// Add two decimal strings.
pub fn add(a: &str, b: &str) -> NumericResult<String> {
    let a: Decimal = a.parse()?;
    let b: Decimal = b.parse()?;
    Ok(a.add(&b).normalized().to_string())
}

/// Subtract decimal string `b` from `a`.
pub fn sub(a: &str, b: &str) -> NumericResult<String> {
    let a: Decimal = a.parse()?;
    let b: Decimal = b.parse()?;
    Ok(a.sub(&b).normalized().to_string())
}

/// Multiply two decimal strings.
pub fn mul(a: &str, b: &str) -> NumericResult<String> {
    let a: Decimal = a.parse()?;
    let b: Decimal = b.parse()?;
    Ok(a.mul(&b).normalized().to_string())
}

/// Divide decimal string `a` by `b`, carrying `scale` fractional digits.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is zero.
pub fn div(a: &str, b: &str, scale: usize) -> NumericResult<String> {
    let a: Decimal = a.parse()?;
    let b: Decimal = b.parse()?;
    Ok(a.div(&b, scale)?.normalized().to_string())
}

/// Canonicalize a decimal string: strip trailing fractional zeros and a
/// bare trailing point, collapse `-0` to `0`.
pub fn normalize(s: &str) -> NumericResult<String> {
    let value: Decimal = s.parse()?;
    Ok(value.normalized().to_string())
}

/// Format a decimal string for a display that caps total significant digits.
///
/// The fractional-digit budget is `max_significant` minus the integer digit
/// count (at least one integer digit is always charged); a fractional part
/// over budget is rounded half-up on the magnitude. This is purely a
/// formatting transform: the caller's precise value is left untouched.
/// Unparseable input (such as an error display text) passes through
/// unchanged.
pub fn format_for_display(value: &str, max_significant: usize) -> String {
    let Ok(parsed) = value.parse::<Decimal>() else {
        return value.to_string();
    };

    let normalized = parsed.normalized();
    if normalized.is_zero() {
        return "0".to_string();
    }

    let allowed = max_significant.saturating_sub(normalized.integer_digit_count().max(1));
    if normalized.scale() > allowed {
        normalized.round_to_scale(allowed).normalized().to_string()
    } else {
        normalized.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Decimal::zero().to_string(), "0");
        assert!(Decimal::zero().is_zero());
        assert_eq!(Decimal::from_integer(42), dec("42"));
        assert_eq!(Decimal::from_integer(-7).to_string(), "-7");
        assert_eq!(
            Decimal::from_unscaled(BigInt::from(125), 2),
            dec("1.25")
        );
        assert_eq!(Decimal::default(), Decimal::zero());
    }

    #[test]
    fn test_parse() {
        let x = dec("123.456");
        assert_eq!(x.unscaled(), &BigInt::from(123_456));
        assert_eq!(x.scale(), 3);

        let y = dec("-0.001");
        assert!(y.is_negative());
        assert_eq!(y.unscaled(), &BigInt::from(-1));
        assert_eq!(y.scale(), 3);

        let z = dec("42");
        assert_eq!(z.scale(), 0);

        // Trailing dot and absent integer part
        assert_eq!(dec("3.").to_string(), "3");
        assert_eq!(dec(".5").to_string(), "0.5");

        // Scale is preserved verbatim until normalization
        assert_eq!(dec("0.50").to_string(), "0.50");
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "abc", "1.2.3", "--1", "-", "1e3"] {
            assert_eq!(
                input.parse::<Decimal>(),
                Err(NumericError::InvalidInput),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(dec("0.05").to_string(), "0.05");
        assert_eq!(dec("-0.5").to_string(), "-0.5");
        assert_eq!(
            Decimal::from_unscaled(BigInt::from(7), 4).to_string(),
            "0.0007"
        );
    }

    #[test]
    fn test_normalized() {
        assert_eq!(dec("1.2300").normalized().to_string(), "1.23");
        assert_eq!(dec("-0").normalized().to_string(), "0");
        assert_eq!(dec("0.000").normalized().to_string(), "0");
        assert_eq!(dec("10").normalized().to_string(), "10");
    }

    #[test]
    fn test_add_aligns_scales() {
        assert_eq!(add("0.1", "0.2").unwrap(), "0.3");
        assert_eq!(add("1.05", "2.9").unwrap(), "3.95");
        assert_eq!(add("-1", "0.25").unwrap(), "-0.75");
    }

    #[test]
    fn test_sub() {
        assert_eq!(sub("1", "0.999").unwrap(), "0.001");
        assert_eq!(sub("0.1", "0.3").unwrap(), "-0.2");
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul("0.5", "0.5").unwrap(), "0.25");
        assert_eq!(mul("1.20", "10").unwrap(), "12");
        assert_eq!(mul("-3", "0.5").unwrap(), "-1.5");
    }

    #[test]
    fn test_div_half_up_on_magnitude() {
        assert_eq!(div("1", "3", 2).unwrap(), "0.33");
        assert_eq!(div("1", "3", 0).unwrap(), "0");
        assert_eq!(div("2", "3", 2).unwrap(), "0.67");
        assert_eq!(div("5", "2", 0).unwrap(), "3");
        assert_eq!(div("-5", "2", 0).unwrap(), "-3");
        assert_eq!(div("5", "-2", 0).unwrap(), "-3");
        assert_eq!(div("1", "8", 12).unwrap(), "0.125");
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(div("8", "0", 12), Err(NumericError::DivisionByZero));
        assert_eq!(div("0", "0.00", 12), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_round_to_scale() {
        assert_eq!(dec("0.335").round_to_scale(2).to_string(), "0.34");
        assert_eq!(dec("0.334").round_to_scale(2).to_string(), "0.33");
        assert_eq!(dec("-0.335").round_to_scale(2).to_string(), "-0.34");
        // Padding direction
        assert_eq!(dec("0.5").round_to_scale(3).to_string(), "0.500");
    }

    #[test]
    fn test_format_for_display_caps_fraction() {
        assert_eq!(
            format_for_display("0.123456789012345", 12),
            "0.123456789012"
        );
        assert_eq!(format_for_display("2.675", 3), "2.68");
        // Integer digits are always shown; only the fraction is budgeted
        assert_eq!(format_for_display("123456789012.5", 12), "123456789013");
        assert_eq!(format_for_display("1.5", 12), "1.5");
    }

    #[test]
    fn test_format_for_display_passthrough() {
        assert_eq!(format_for_display("Error", 12), "Error");
        assert_eq!(format_for_display("0.000", 12), "0");
        assert_eq!(format_for_display("3.", 12), "3");
    }

    #[test]
    fn test_negation() {
        assert_eq!((-dec("1.5")).to_string(), "-1.5");
        assert_eq!((-dec("-0.25")).to_string(), "0.25");
    }
}
