use serde::{Deserialize, Serialize};

/// Kind of hydrocarbon reserve being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReserveType {
    Oil,
    Gas,
}

impl ReserveType {
    /// Unit of the in-place volume: stock-tank barrels or standard cubic feet.
    pub fn unit(&self) -> &'static str {
        match self {
            ReserveType::Oil => "STB",
            ReserveType::Gas => "SCF",
        }
    }

    /// Short label of the in-place volume (OIIP or GIIP).
    pub fn in_place_label(&self) -> &'static str {
        match self {
            ReserveType::Oil => "OIIP",
            ReserveType::Gas => "GIIP",
        }
    }

    /// Long label of the in-place volume.
    pub fn in_place_name(&self) -> &'static str {
        match self {
            ReserveType::Oil => "Oil Initially In Place",
            ReserveType::Gas => "Gas Initially In Place",
        }
    }

    /// Label of the formation volume factor with its unit.
    pub fn factor_label(&self) -> &'static str {
        match self {
            ReserveType::Oil => "Bo (RB/STB)",
            ReserveType::Gas => "Bg (RCF/SCF)",
        }
    }
}

impl std::fmt::Display for ReserveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReserveType::Oil => write!(f, "Oil"),
            ReserveType::Gas => write!(f, "Gas"),
        }
    }
}

impl std::str::FromStr for ReserveType {
    type Err = crate::error::ReservoirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oil" | "o" => Ok(ReserveType::Oil),
            "gas" | "g" => Ok(ReserveType::Gas),
            _ => Err(crate::error::ReservoirError::ParseError(format!(
                "Unknown reserve type: '{s}'. Use: oil or gas"
            ))),
        }
    }
}

/// Reserve kind together with its formation volume factor.
///
/// Bo converts reservoir barrels to stock-tank barrels, Bg converts reservoir
/// cubic feet to standard cubic feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reserve {
    /// Oil reserve with formation volume factor Bo (RB/STB)
    Oil { bo: f64 },
    /// Gas reserve with formation volume factor Bg (RCF/SCF)
    Gas { bg: f64 },
}

impl Reserve {
    /// Build a reserve of the given kind carrying `factor` as Bo or Bg.
    pub fn new(reserve_type: ReserveType, factor: f64) -> Self {
        match reserve_type {
            ReserveType::Oil => Reserve::Oil { bo: factor },
            ReserveType::Gas => Reserve::Gas { bg: factor },
        }
    }

    pub fn reserve_type(&self) -> ReserveType {
        match self {
            Reserve::Oil { .. } => ReserveType::Oil,
            Reserve::Gas { .. } => ReserveType::Gas,
        }
    }

    /// The formation volume factor, Bo for oil and Bg for gas.
    pub fn formation_volume_factor(&self) -> f64 {
        match *self {
            Reserve::Oil { bo } => bo,
            Reserve::Gas { bg } => bg,
        }
    }

    pub fn unit(&self) -> &'static str {
        self.reserve_type().unit()
    }
}

impl std::fmt::Display for Reserve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reserve::Oil { bo } => write!(f, "Oil (Bo = {bo} RB/STB)"),
            Reserve::Gas { bg } => write!(f, "Gas (Bg = {bg} RCF/SCF)"),
        }
    }
}
