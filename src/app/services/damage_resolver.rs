//! Damage value resolution for storm-event records
//!
//! NOAA storm-event rows record economic damage as a magnitude plus a
//! short exponent code ("K" for thousands, "M" for millions, and so on).
//! Mis-reading a code shifts a damage figure by orders of magnitude, so
//! the resolver is a total function over the defined vocabulary and fails
//! loudly on anything else rather than coercing it to zero.

use crate::{Error, Result};

/// Resolve a damage exponent code token to a power-of-ten exponent.
///
/// The vocabulary, case-insensitive where letters are involved:
/// - `h`/`H` hundreds (2), `k`/`K` thousands (3), `m`/`M` millions (6),
///   `b`/`B` billions (9)
/// - an integer literal is taken as the exponent itself
/// - empty, `-`, `?`, and `+` mean "no scale" (0)
///
/// Any other token is an [`Error::InvalidExponentCode`].
pub fn resolve_exponent(code: &str) -> Result<i32> {
    let token = code.trim();

    match token {
        "" | "-" | "?" | "+" => Ok(0),
        "h" | "H" => Ok(2),
        "k" | "K" => Ok(3),
        "m" | "M" => Ok(6),
        "b" | "B" => Ok(9),
        _ => token
            .parse::<i32>()
            .map_err(|_| Error::invalid_exponent_code(token)),
    }
}

/// Compute the dollar value of a (magnitude, exponent code) damage pair.
///
/// A zero magnitude with any valid code yields zero; an invalid code is
/// an error regardless of magnitude.
pub fn damage_value(magnitude: f64, exponent_code: &str) -> Result<f64> {
    let exponent = resolve_exponent(exponent_code)?;
    Ok(magnitude * 10f64.powi(exponent))
}
