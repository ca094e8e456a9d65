use crate::domain::{Cents, DomainError, RowCount};

/// Parse one line of console input as a signed decimal integer.
///
/// Surrounding whitespace (including the line terminator) is ignored.
/// Anything that does not fit in an `i64` counts as not-a-number.
pub fn parse_integer(input: &str) -> Result<i64, DomainError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| DomainError::NotAnInteger {
            input: trimmed.to_owned(),
        })
}

/// Amount owed: any integer ≥ 0.
pub fn parse_owed(input: &str) -> Result<Cents, DomainError> {
    let value = parse_integer(input)?;
    u64::try_from(value)
        .map(Cents::new)
        .map_err(|_| DomainError::OutOfRange { value, minimum: 0 })
}

/// Pyramid height: any integer ≥ 1.
pub fn parse_rows(input: &str) -> Result<RowCount, DomainError> {
    RowCount::try_from(parse_integer(input)?)
}
