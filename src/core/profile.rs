use crate::core::reducer::{digit_sum, reduce_to_single, sum_digit_chars};
use crate::domain::model::{BirthDate, NumerologyProfile, Sex};

/// Single-digit days are taken as they are; larger days are reduced.
pub fn personality(date: &BirthDate) -> u8 {
    let day = date.day();
    if day > 9 {
        reduce_to_single(day)
    } else {
        day as u8
    }
}

/// Reduced sum of every digit in the unpadded day, month and year.
pub fn destiny(date: &BirthDate) -> u8 {
    reduce_to_single(sum_digit_chars(&date.digit_string()))
}

pub fn kua(date: &BirthDate, sex: Sex) -> u8 {
    // year > 0, so the reduced year sum is always within 1..=9
    let year_sum = u64::from(reduce_to_single(digit_sum(date.year())));
    let base = match sex {
        Sex::Male => 11 - year_sum,
        Sex::Female => year_sum + 4,
    };
    reduce_to_single(base)
}

pub fn calculate_profile(date: &BirthDate, sex: Sex) -> NumerologyProfile {
    NumerologyProfile {
        personality: personality(date),
        destiny: destiny(date),
        kua: kua(date, sex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::date_parser::parse_dob;

    #[test]
    fn test_reference_date_male() {
        let date = parse_dob("05/12/1990").unwrap();
        let profile = calculate_profile(&date, Sex::Male);

        assert_eq!(profile.personality, 5);
        assert_eq!(profile.destiny, 9);
        assert_eq!(profile.kua, 1);
    }

    #[test]
    fn test_reference_date_female() {
        // year sum 19 -> 1, base 5
        let date = parse_dob("05/12/1990").unwrap();
        assert_eq!(kua(&date, Sex::Female), 5);
    }

    #[test]
    fn test_personality_reduces_two_digit_days() {
        assert_eq!(personality(&parse_dob("29/01/2000").unwrap()), 2);
        assert_eq!(personality(&parse_dob("10/01/2000").unwrap()), 1);
        assert_eq!(personality(&parse_dob("9/01/2000").unwrap()), 9);
    }

    #[test]
    fn test_positional_slash_date() {
        let date = parse_dob("1990/05/12").unwrap();
        assert_eq!(personality(&date), 1);
        // "1990512" -> 27 -> 9
        assert_eq!(destiny(&date), 9);
    }

    #[test]
    fn test_kua_base_extremes() {
        // year 1899: 27 -> 9; male base 2, female base 13 -> 4
        let date = parse_dob("01/01/1899").unwrap();
        assert_eq!(kua(&date, Sex::Male), 2);
        assert_eq!(kua(&date, Sex::Female), 4);

        // year 2008: 10 -> 1; male base 10 -> 1
        let date = parse_dob("01/01/2008").unwrap();
        assert_eq!(kua(&date, Sex::Male), 1);
    }

    #[test]
    fn test_wide_year_and_day() {
        // 4294967296 -> 58 -> 13 -> 4
        let date = parse_dob("4294967296/1/1990").unwrap();
        assert_eq!(personality(&date), 4);

        // 99999999999 -> 99 -> 18 -> 9; male base 2, female base 13 -> 4
        let date = parse_dob("1/1/99999999999").unwrap();
        assert_eq!(kua(&date, Sex::Male), 2);
        assert_eq!(kua(&date, Sex::Female), 4);
        // 1 + 1 + 99 = 101 -> 2
        assert_eq!(destiny(&date), 2);
    }

    #[test]
    fn test_profile_numbers_are_single_non_zero_digits() {
        for year in [1, 9, 10, 1900, 1999, 2000, 2024, 9999] {
            for day in [1, 9, 10, 19, 28, 31] {
                for month in [1, 10, 12] {
                    let date = BirthDate::new(day, month, year);
                    for sex in [Sex::Male, Sex::Female] {
                        let profile = calculate_profile(&date, sex);
                        for n in [profile.personality, profile.destiny, profile.kua] {
                            assert!((1..=9).contains(&n), "{:?} gave {:?}", date, profile);
                        }
                    }
                }
            }
        }
    }
}
