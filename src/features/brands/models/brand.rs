use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Retail brand owning a slice of the document collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Knitwell,
    Chicos,
    Talbots,
}

impl Brand {
    /// The fixed brand enumeration, in display order
    pub const ALL: [Brand; 3] = [Brand::Knitwell, Brand::Chicos, Brand::Talbots];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Knitwell => "knitwell",
            Brand::Chicos => "chicos",
            Brand::Talbots => "talbots",
        }
    }

    /// Human-facing label for brand pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::Knitwell => "Knitwell",
            Brand::Chicos => "Chico's",
            Brand::Talbots => "Talbots",
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Brand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "knitwell" => Ok(Brand::Knitwell),
            "chicos" => Ok(Brand::Chicos),
            "talbots" => Ok(Brand::Talbots),
            other => Err(format!("Unknown brand '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_display_round_trip() {
        for brand in Brand::ALL {
            assert_eq!(Brand::from_str(brand.as_str()).unwrap(), brand);
        }
    }

    #[test]
    fn test_unknown_brand_rejected() {
        assert!(Brand::from_str("soma").is_err());
        assert!(Brand::from_str("Knitwell").is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Brand::Chicos).unwrap(), "\"chicos\"");
        let parsed: Brand = serde_json::from_str("\"talbots\"").unwrap();
        assert_eq!(parsed, Brand::Talbots);
    }
}
