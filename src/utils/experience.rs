use crate::error::{AppError, AppResult};

pub const EXPERIENCE_YEAR_MESSAGE: &str = "Год должен состоять из 4 цифр";

/// The year a staff member started working must be written with exactly
/// four characters.
pub fn validate_experience_year(year: i32) -> AppResult<()> {
    if year.to_string().len() != 4 {
        return Err(AppError::ValidationError(EXPERIENCE_YEAR_MESSAGE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_digit_years_pass() {
        assert!(validate_experience_year(1999).is_ok());
        assert!(validate_experience_year(2024).is_ok());
        assert!(validate_experience_year(1000).is_ok());
    }

    #[test]
    fn test_other_lengths_fail() {
        for year in [0, 99, 999, 19999, i32::MAX] {
            match validate_experience_year(year) {
                Err(AppError::ValidationError(msg)) => assert_eq!(msg, EXPERIENCE_YEAR_MESSAGE),
                other => panic!("{year}: unexpected result {other:?}"),
            }
        }
    }
}
