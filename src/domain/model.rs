use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day, month and year exactly as they were typed, with no calendar checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthDate {
    day: u64,
    month: u64,
    year: u64,
}

impl BirthDate {
    /// Only the date parser builds these; all three fields are non-zero.
    pub(crate) fn new(day: u64, month: u64, year: u64) -> Self {
        debug_assert!(day > 0 && month > 0 && year > 0);
        Self { day, month, year }
    }

    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn month(&self) -> u64 {
        self.month
    }

    pub fn year(&self) -> u64 {
        self.year
    }

    /// `day`, `month` and `year` concatenated without padding, e.g. 5/12/1990 -> "5121990".
    pub fn digit_string(&self) -> String {
        format!("{}{}{}", self.day, self.month, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(format!("unknown sex '{}', expected Male or Female", other)),
        }
    }
}

/// What the numerology core consumes. Name and email stay in the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    pub date_of_birth: String,
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub personality: u8,
    pub destiny: u8,
    pub kua: u8,
}

impl NumerologyProfile {
    /// Personality and Destiny count as covered even when absent from the date digits.
    pub fn covers(&self, number: u8) -> bool {
        number == self.personality || number == self.destiny
    }

    pub fn is_core(&self, number: u8) -> bool {
        self.covers(number) || number == self.kua
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellClass {
    Present,
    Missing,
    Core,
}

/// Payload handed to the notification sink when a custom bracelet is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRequest {
    pub name: String,
    pub dob: String,
    pub sex: Sex,
    pub email: String,
    pub phone: String,
    pub problems: String,
    pub missing: String,
    pub personality: u8,
    pub destiny: u8,
    pub kua: u8,
    pub requested_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_string_has_no_padding() {
        let date = BirthDate::new(5, 12, 1990);
        assert_eq!(date.digit_string(), "5121990");

        let date = BirthDate::new(1990, 5, 12);
        assert_eq!(date.digit_string(), "1990512");
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("f".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(" FEMALE ".parse::<Sex>().unwrap(), Sex::Female);
        assert!("other".parse::<Sex>().is_err());
    }

    #[test]
    fn test_profile_coverage_excludes_kua() {
        let profile = NumerologyProfile {
            personality: 5,
            destiny: 9,
            kua: 1,
        };
        assert!(profile.covers(5));
        assert!(profile.covers(9));
        assert!(!profile.covers(1));
        assert!(profile.is_core(1));
        assert!(!profile.is_core(3));
    }

    #[test]
    fn test_cell_class_serializes_lowercase() {
        let json = serde_json::to_string(&CellClass::Missing).unwrap();
        assert_eq!(json, "\"missing\"");
    }
}
