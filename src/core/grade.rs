//! Grade symbols and the fixed point lookup
//!
//! The grade scale is a closed set of seven symbols:
//! O, A+, A, B+, B, C+, C mapping to 10..=4 points.
//! The mapping is total and immutable for the lifetime of the process;
//! any symbol outside the set is invalid input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A letter grade from the fixed scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "O")]
    O,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
}

/// All grades in descending point order, as displayed in grade pickers
pub const ALL_GRADES: [Grade; 7] = [
    Grade::O,
    Grade::APlus,
    Grade::A,
    Grade::BPlus,
    Grade::B,
    Grade::CPlus,
    Grade::C,
];

impl Grade {
    /// Point value for this grade
    pub fn points(&self) -> u32 {
        match self {
            Grade::O => 10,
            Grade::APlus => 9,
            Grade::A => 8,
            Grade::BPlus => 7,
            Grade::B => 6,
            Grade::CPlus => 5,
            Grade::C => 4,
        }
    }

    /// The display symbol for this grade
    pub fn symbol(&self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
        }
    }

    /// Parse a grade symbol. Returns `None` for anything outside the scale.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "O" => Some(Grade::O),
            "A+" => Some(Grade::APlus),
            "A" => Some(Grade::A),
            "B+" => Some(Grade::BPlus),
            "B" => Some(Grade::B),
            "C+" => Some(Grade::CPlus),
            "C" => Some(Grade::C),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_lookup() {
        assert_eq!(Grade::O.points(), 10);
        assert_eq!(Grade::APlus.points(), 9);
        assert_eq!(Grade::C.points(), 4);
    }

    #[test]
    fn test_symbol_round_trip() {
        for grade in ALL_GRADES {
            assert_eq!(Grade::from_symbol(grade.symbol()), Some(grade));
        }
    }

    #[test]
    fn test_invalid_symbols() {
        assert_eq!(Grade::from_symbol("F"), None);
        assert_eq!(Grade::from_symbol("o"), None);
        assert_eq!(Grade::from_symbol(""), None);
        assert_eq!(Grade::from_symbol("A +"), None);
    }

    #[test]
    fn test_serde_uses_symbols() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        let grade: Grade = serde_json::from_str("\"C+\"").unwrap();
        assert_eq!(grade, Grade::CPlus);
    }
}
