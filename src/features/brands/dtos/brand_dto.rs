use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::brands::models::Brand;

/// Response DTO for a brand entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandResponseDto {
    /// Machine identifier, used as the `brand` parameter elsewhere
    pub value: Brand,
    /// Human-facing label
    pub label: String,
}

impl From<Brand> for BrandResponseDto {
    fn from(brand: Brand) -> Self {
        Self {
            value: brand,
            label: brand.display_name().to_string(),
        }
    }
}
