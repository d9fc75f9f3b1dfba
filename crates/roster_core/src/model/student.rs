//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical student record owned by the store.
//! - Provide pure field validators that any collaborator may call before
//!   submitting raw input.
//!
//! # Invariants
//! - `id` is exactly 12 ASCII digits and unique inside a store.
//! - `gpa` is held in hundredths, so two-decimal display is always exact.
//! - Validation failures name the offending field and never leak raw parse
//!   errors.

use super::ParseKindError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MAX_GPA_HUNDREDTHS: u16 = 400;

// `[0-9]` instead of `\d`: the regex crate treats `\d` as any Unicode digit.
static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("valid id regex"));
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\s.'\-]{2,80}$").expect("valid name regex"));
static GPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-4](?:\.[0-9]{1,2})?$").expect("valid gpa regex"));

/// Returns whether `value` is a well-formed student number (12 ASCII digits).
pub fn validate_id(value: &str) -> bool {
    ID_RE.is_match(value)
}

/// Returns whether `value` is an acceptable student name.
///
/// Accepts 2-80 characters made of letters, whitespace, `.`, `'` and `-`.
pub fn validate_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Returns whether `value` is a GPA in `[0.00, 4.00]` with at most two
/// fractional digits.
pub fn validate_gpa(value: &str) -> bool {
    Gpa::parse(value).is_ok()
}

/// Selects one of the four student fields.
///
/// Used by field-qualified search queries, sort keys and validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentField {
    Id,
    Name,
    Major,
    Gpa,
}

impl StudentField {
    /// Every field, in wire/export column order.
    pub const ALL: [StudentField; 4] = [
        StudentField::Id,
        StudentField::Name,
        StudentField::Major,
        StudentField::Gpa,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Major => "major",
            Self::Gpa => "gpa",
        }
    }
}

impl Display for StudentField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentField {
    type Err = ParseKindError;

    /// Parses a field name case-insensitively.
    ///
    /// The legacy names `nim` and `ipk` map to `id` and `gpa`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "id" | "nim" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "major" => Ok(Self::Major),
            "gpa" | "ipk" => Ok(Self::Gpa),
            _ => Err(ParseKindError::new("field", value, "id|name|major|gpa")),
        }
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    InvalidIdFormat,
    InvalidNameFormat,
    InvalidGpaFormat,
    GpaOutOfRange,
}

impl Display for ValidationReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::InvalidIdFormat => "expected exactly 12 digits",
            Self::InvalidNameFormat => {
                "expected 2-80 letters, spaces, periods, apostrophes or hyphens"
            }
            Self::InvalidGpaFormat => "expected a number with at most two decimal places",
            Self::GpaOutOfRange => "must be between 0.00 and 4.00",
        };
        f.write_str(message)
    }
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: StudentField,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: StudentField, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.reason)
    }
}

impl Error for ValidationError {}

/// Grade point average in `[0.00, 4.00]`, stored as hundredths.
///
/// Serialized as a JSON number (`3.9`), deserialized through
/// [`Gpa::from_f64`] so out-of-range or over-precise values are rejected.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Gpa(u16);

impl Gpa {
    pub const ZERO: Gpa = Gpa(0);
    pub const MAX: Gpa = Gpa(MAX_GPA_HUNDREDTHS);

    /// Builds a GPA from hundredths (`395` is `3.95`).
    pub fn from_hundredths(hundredths: u16) -> Result<Self, ValidationError> {
        if hundredths > MAX_GPA_HUNDREDTHS {
            return Err(gpa_error(ValidationReason::GpaOutOfRange));
        }
        Ok(Self(hundredths))
    }

    /// Builds a GPA from a floating-point value.
    ///
    /// # Errors
    /// - `InvalidGpaFormat` for NaN/infinite input or more than two decimals.
    /// - `GpaOutOfRange` outside `[0.00, 4.00]`.
    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(gpa_error(ValidationReason::InvalidGpaFormat));
        }
        if !(0.0..=4.0).contains(&value) {
            return Err(gpa_error(ValidationReason::GpaOutOfRange));
        }
        // Range was checked above, so the rounded value fits in 0..=400.
        let hundredths = (value * 100.0).round() as u16;
        // Division is correctly rounded, so only values with at most two
        // decimals map back to the exact same f64.
        if f64::from(hundredths) / 100.0 != value {
            return Err(gpa_error(ValidationReason::InvalidGpaFormat));
        }
        Self::from_hundredths(hundredths)
    }

    /// Parses raw form input such as `"3"`, `"3.9"` or `"3.95"`.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !GPA_RE.is_match(text) {
            return Err(gpa_error(ValidationReason::InvalidGpaFormat));
        }

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        let whole = digits_value(whole);
        let fraction = match fraction.len() {
            0 => 0,
            1 => digits_value(fraction) * 10,
            _ => digits_value(fraction),
        };
        Self::from_hundredths(whole * 100 + fraction)
    }

    pub fn hundredths(self) -> u16 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Display for Gpa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<f64> for Gpa {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl From<Gpa> for f64 {
    fn from(value: Gpa) -> Self {
        value.as_f64()
    }
}

impl FromStr for Gpa {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

/// Canonical student record.
///
/// Fields stay public so UI collaborators can read them directly; the store
/// re-validates every record it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    /// 12-digit student number. Older snapshots call it `nim`.
    #[serde(alias = "nim")]
    pub id: String,
    pub name: String,
    /// Free text, unconstrained by core.
    pub major: String,
    /// Older snapshots call it `ipk`.
    #[serde(alias = "ipk")]
    pub gpa: Gpa,
}

impl Student {
    /// Creates a validated record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        major: impl Into<String>,
        gpa: Gpa,
    ) -> Result<Self, ValidationError> {
        let student = Self {
            id: id.into(),
            name: name.into(),
            major: major.into(),
            gpa,
        };
        student.validate()?;
        Ok(student)
    }

    /// Creates a validated record from raw text input, as forms collect it.
    ///
    /// Fields are checked in `id`, `name`, `gpa` order; the first failure wins.
    pub fn parse(
        id: &str,
        name: &str,
        major: &str,
        gpa_text: &str,
    ) -> Result<Self, ValidationError> {
        check_id(id)?;
        check_name(name)?;
        let gpa = Gpa::parse(gpa_text)?;
        Self::new(id, name, major, gpa)
    }

    /// Checks every field constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_id(&self.id)?;
        check_name(&self.name)?;
        if self.gpa > Gpa::MAX {
            return Err(gpa_error(ValidationReason::GpaOutOfRange));
        }
        Ok(())
    }

    /// Returns the field value as display text (`gpa` with two decimals).
    pub fn field_text(&self, field: StudentField) -> Cow<'_, str> {
        match field {
            StudentField::Id => Cow::Borrowed(&self.id),
            StudentField::Name => Cow::Borrowed(&self.name),
            StudentField::Major => Cow::Borrowed(&self.major),
            StudentField::Gpa => Cow::Owned(self.gpa.to_string()),
        }
    }

    /// Orders two records by one field's natural order.
    ///
    /// Text fields compare lexicographically, `gpa` numerically.
    pub fn compare_by(&self, other: &Self, field: StudentField) -> Ordering {
        match field {
            StudentField::Id => self.id.cmp(&other.id),
            StudentField::Name => self.name.cmp(&other.name),
            StudentField::Major => self.major.cmp(&other.major),
            StudentField::Gpa => self.gpa.cmp(&other.gpa),
        }
    }
}

fn check_id(id: &str) -> Result<(), ValidationError> {
    if validate_id(id) {
        Ok(())
    } else {
        Err(ValidationError::new(
            StudentField::Id,
            ValidationReason::InvalidIdFormat,
        ))
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if validate_name(name) {
        Ok(())
    } else {
        Err(ValidationError::new(
            StudentField::Name,
            ValidationReason::InvalidNameFormat,
        ))
    }
}

fn gpa_error(reason: ValidationReason) -> ValidationError {
    ValidationError::new(StudentField::Gpa, reason)
}

// Input is already regex-checked to be 1-2 ASCII digits.
fn digits_value(digits: &str) -> u16 {
    digits
        .bytes()
        .fold(0, |acc, byte| acc * 10 + u16::from(byte - b'0'))
}
