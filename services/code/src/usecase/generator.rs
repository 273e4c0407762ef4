use rand::TryRng;
use rand::rngs::SysRng;

use crate::domain::types::MAX_CODE_DIGITS;
use crate::error::CodeServiceError;

/// Generate a random code whose decimal digit count lies in
/// `[min_length, max_length]`, drawing from the OS random source.
pub fn generate(max_length: u32, min_length: u32) -> Result<u64, CodeServiceError> {
    generate_with(&mut SysRng, max_length, min_length)
}

/// Same as [`generate`] with a caller-supplied random source.
///
/// The digit length is picked uniformly first, then a uniform value of
/// exactly that length, so short codes are not over-represented.
pub fn generate_with<R>(
    rng: &mut R,
    max_length: u32,
    min_length: u32,
) -> Result<u64, CodeServiceError>
where
    R: TryRng + ?Sized,
    R::Error: std::fmt::Display,
{
    validate_range(max_length, min_length)?;

    let span = u64::from(max_length - min_length) + 1;
    let length = min_length + uniform_below(rng, span)? as u32;

    let high = 10u64.pow(length) - 1;
    let low = if length == 1 { 0 } else { 10u64.pow(length - 1) };
    Ok(low + uniform_below(rng, high - low + 1)?)
}

/// Check digit-length bounds: `1 <= min_length <= max_length <= 19`.
pub fn validate_range(max_length: u32, min_length: u32) -> Result<(), CodeServiceError> {
    if min_length == 0 || min_length > max_length || max_length > MAX_CODE_DIGITS {
        return Err(CodeServiceError::InvalidRange {
            min_length,
            max_length,
        });
    }
    Ok(())
}

/// Uniform value in `[0, bound)` via rejection sampling; `bound` must be > 0.
fn uniform_below<R>(rng: &mut R, bound: u64) -> Result<u64, CodeServiceError>
where
    R: TryRng + ?Sized,
    R::Error: std::fmt::Display,
{
    // Largest accepted word, leaving a multiple of `bound` values below it.
    let remainder = (u64::MAX % bound + 1) % bound;
    let zone = u64::MAX - remainder;
    loop {
        let word = rng
            .try_next_u64()
            .map_err(|e| CodeServiceError::RandomSourceFailure(e.to_string()))?;
        if word <= zone {
            return Ok(word % bound);
        }
    }
}
