//! Course - one row of the grade table
//!
//! Each course carries a free-form name, an optional grade from the fixed
//! scale, and a non-negative credit count. A course contributes to GPA/CGPA
//! aggregation only while it qualifies (grade set and credits > 0);
//! non-qualifying courses stay in the table but are skipped.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::grade::Grade;

/// Credits assigned to a freshly added course
pub const DEFAULT_CREDITS: u32 = 3;

/// Parse free-form credits input, defaulting to zero on failure.
///
/// This is the single coercion path for credit input: a non-negative
/// integer parses to itself, everything else (negative, fractional,
/// non-numeric, empty) coerces to 0. Not error swallowing - an explicit
/// numeric fallback contract, so it is named and tested directly.
pub fn parse_credits_or_zero(input: &str) -> u32 {
    input.trim().parse::<u32>().unwrap_or(0)
}

/// Which field of a course an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseField {
    Name,
    Grade,
    Credits,
}

/// A single course entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course name, may be empty
    #[serde(default)]
    pub name: String,
    /// Grade, `None` when unset (serialized as the symbol, or "" for unset)
    #[serde(
        default = "default_grade",
        serialize_with = "serialize_grade",
        deserialize_with = "deserialize_grade"
    )]
    pub grade: Option<Grade>,
    /// Credit count; only courses with credits > 0 qualify
    #[serde(default, deserialize_with = "deserialize_credits")]
    pub credits: u32,
}

impl Default for Course {
    fn default() -> Self {
        Self {
            name: String::new(),
            grade: Some(Grade::O),
            credits: DEFAULT_CREDITS,
        }
    }
}

impl Course {
    /// Create a course with every field given
    pub fn new(name: impl Into<String>, grade: Option<Grade>, credits: u32) -> Self {
        Self {
            name: name.into(),
            grade,
            credits,
        }
    }

    /// Whether this course counts toward aggregation
    pub fn qualifies(&self) -> bool {
        self.grade.is_some() && self.credits > 0
    }

    /// Apply a field edit. Grade symbols outside the scale unset the
    /// grade; credits input goes through [`parse_credits_or_zero`].
    pub fn update(&mut self, field: CourseField, value: &str) {
        match field {
            CourseField::Name => self.name = value.to_string(),
            CourseField::Grade => self.grade = Grade::from_symbol(value),
            CourseField::Credits => self.credits = parse_credits_or_zero(value),
        }
    }
}

fn default_grade() -> Option<Grade> {
    None
}

fn serialize_grade<S: Serializer>(grade: &Option<Grade>, s: S) -> Result<S::Ok, S::Error> {
    match grade {
        Some(g) => s.serialize_str(g.symbol()),
        None => s.serialize_str(""),
    }
}

/// Lenient grade decoding: a known symbol yields that grade, any other
/// value (empty string, unknown symbol, wrong type, null) yields unset.
fn deserialize_grade<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Grade>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(value.as_str().and_then(Grade::from_symbol))
}

/// Lenient credits decoding: non-negative numbers pass through, numeric
/// strings are parsed, everything else coerces to 0.
fn deserialize_credits<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(d)?;
    let credits = match &value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
            .unwrap_or(0),
        Value::String(s) => parse_credits_or_zero(s),
        _ => 0,
    };
    Ok(credits)
}
