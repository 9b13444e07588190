use crate::errors::errors::ErrorImpl;

/// Converts a decimal literal (`-?[0-9]*(\.[0-9]*)?`) into an `f64`.
///
/// The value is built digit by digit: integer digits as `result * 10 + d`,
/// fractional digits as `result += d / 10^k`. This does not round the way a
/// correctly-rounded decimal conversion does for long fractional parts, and
/// callers rely on that exact accumulation.
pub fn parse_number(text: &str) -> Result<f64, ErrorImpl> {
    if text.is_empty() {
        return Err(ErrorImpl::EmptyNumber);
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut result = 0.0_f64;
    let mut fraction = false;
    let mut divisor = 1.0_f64;

    for character in digits.chars() {
        match character {
            '.' if !fraction => fraction = true,
            '0'..='9' => {
                let digit = f64::from(character as u8 - b'0');

                if fraction {
                    divisor *= 10.0;
                    result += digit / divisor;
                } else {
                    result = result * 10.0 + digit;
                }
            }
            _ => return Err(ErrorImpl::InvalidNumberCharacter { character }),
        }
    }

    Ok(if negative { -result } else { result })
}
