//! Color tag shared by expenses, debts, and jars.

use crate::errors::Error;
use serde::{Deserialize, Serialize};

/// Gradient color tag attached to user-created records. Purely cosmetic;
/// the presentation layer maps each tag onto a gradient style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    /// Default tag for new records
    #[default]
    Pink,
    /// Blue/cyan gradient
    Blue,
    /// Purple/violet gradient
    Purple,
    /// Green/emerald gradient
    Green,
    /// Yellow/amber gradient
    Yellow,
    /// Orange/amber gradient
    Orange,
    /// Teal/cyan gradient
    Mint,
    /// Indigo/purple gradient
    Lavender,
}

impl ColorTag {
    /// The lowercase wire name of this tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Mint => "mint",
            Self::Lavender => "lavender",
        }
    }
}

impl std::str::FromStr for ColorTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pink" => Ok(Self::Pink),
            "blue" => Ok(Self::Blue),
            "purple" => Ok(Self::Purple),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "orange" => Ok(Self::Orange),
            "mint" => Ok(Self::Mint),
            "lavender" => Ok(Self::Lavender),
            other => Err(Error::Decode {
                field: "color",
                message: format!("unknown color tag {other:?}"),
            }),
        }
    }
}
