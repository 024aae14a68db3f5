use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{PricingError, Result};

/// Performance category derived from the number of dancers on stage.
///
/// The federation's brackets are fixed: 1 dancer is a solo, 2 a duet,
/// 3 to 7 a small group, 8 to 24 a formation, and 25 or more a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NominationCategory {
    Solo,
    Duet,
    SmallGroup,
    Formation,
    Production,
}

impl NominationCategory {
    /// Resolves the category from a participant count. A count of zero is
    /// rejected; every count of one or more maps to exactly one category.
    pub fn from_participants_count(count: u32) -> Result<Self> {
        match count {
            0 => Err(PricingError::InvalidInput(
                "participantsCount must be at least 1".to_string(),
            )),
            1 => Ok(Self::Solo),
            2 => Ok(Self::Duet),
            3..=7 => Ok(Self::SmallGroup),
            8..=24 => Ok(Self::Formation),
            _ => Ok(Self::Production),
        }
    }

    /// Canonical name used to match against an event's price table rows.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Duet => "Duet",
            Self::SmallGroup => "Small Group",
            Self::Formation => "Formation",
            Self::Production => "Production",
        }
    }
}

impl fmt::Display for NominationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
