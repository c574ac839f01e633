use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FleetError;

/// Driver's license categories. Higher categories cover every lower one:
/// E > D > C > B > A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LicenseCategory {
    A,
    B,
    C,
    D,
    E,
}

impl LicenseCategory {
    pub const ALL: [LicenseCategory; 5] = [
        LicenseCategory::A,
        LicenseCategory::B,
        LicenseCategory::C,
        LicenseCategory::D,
        LicenseCategory::E,
    ];

    /// Position in the hierarchy, starting at 1 for A.
    pub fn rank(self) -> u8 {
        match self {
            LicenseCategory::A => 1,
            LicenseCategory::B => 2,
            LicenseCategory::C => 3,
            LicenseCategory::D => 4,
            LicenseCategory::E => 5,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            LicenseCategory::A => "A",
            LicenseCategory::B => "B",
            LicenseCategory::C => "C",
            LicenseCategory::D => "D",
            LicenseCategory::E => "E",
        }
    }

    /// Whether a holder of `self` may drive a truck requiring `required`.
    pub fn can_operate(self, required: LicenseCategory) -> bool {
        can_operate(self, required)
    }

    pub fn compatible_set(self) -> BTreeSet<LicenseCategory> {
        compatible_set(self)
    }
}

pub fn can_operate(held: LicenseCategory, required: LicenseCategory) -> bool {
    held.rank() >= required.rank()
}

/// Every category a holder of `held` is covered for, `held` included.
pub fn compatible_set(held: LicenseCategory) -> BTreeSet<LicenseCategory> {
    LicenseCategory::ALL
        .into_iter()
        .filter(|c| c.rank() <= held.rank())
        .collect()
}

impl fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LicenseCategory {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LicenseCategory::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| {
                FleetError::Validation(format!(
                    "Unknown license type '{}', expected one of A, B, C, D, E",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LicenseCategory::*;

    #[test]
    fn can_operate_follows_rank_for_every_pair() {
        for held in LicenseCategory::ALL {
            for required in LicenseCategory::ALL {
                assert_eq!(
                    can_operate(held, required),
                    held.rank() >= required.rank(),
                    "held={held} required={required}"
                );
            }
        }
    }

    #[test]
    fn ranks_are_fixed() {
        let ranks: Vec<u8> = LicenseCategory::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn compatible_set_is_inclusive_prefix() {
        assert_eq!(compatible_set(A), BTreeSet::from([A]));
        assert_eq!(compatible_set(C), BTreeSet::from([A, B, C]));
        assert_eq!(compatible_set(E), BTreeSet::from([A, B, C, D, E]));
    }

    #[test]
    fn method_forms_match_free_functions() {
        assert!(D.can_operate(C));
        assert!(!B.can_operate(D));
        assert_eq!(B.compatible_set(), compatible_set(B));
    }

    #[test]
    fn parses_single_letter_codes() {
        assert_eq!("D".parse::<LicenseCategory>().unwrap(), D);
        assert!(matches!(
            "F".parse::<LicenseCategory>(),
            Err(FleetError::Validation(_))
        ));
        assert!("d".parse::<LicenseCategory>().is_err());
    }

    #[test]
    fn serializes_as_letter() {
        assert_eq!(serde_json::to_string(&E).unwrap(), "\"E\"");
        let parsed: LicenseCategory = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(parsed, B);
    }
}
