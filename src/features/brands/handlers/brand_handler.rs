use axum::Json;

use crate::core::error::Result;
use crate::features::brands::dtos::BrandResponseDto;
use crate::features::brands::models::Brand;
use crate::shared::types::{ApiResponse, Meta};

/// List all brands
///
/// The brand set is fixed; this endpoint exists so pickers don't hardcode it.
#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "List of brands", body = ApiResponse<Vec<BrandResponseDto>>),
    ),
    tag = "brands"
)]
pub async fn list_brands() -> Result<Json<ApiResponse<Vec<BrandResponseDto>>>> {
    let brands: Vec<BrandResponseDto> = Brand::ALL.into_iter().map(Into::into).collect();
    let total = brands.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(brands),
        None,
        Some(Meta { total }),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_brands_returns_fixed_enumeration() {
        let Json(response) = list_brands().await.unwrap();
        let brands = response.data.unwrap();

        assert_eq!(brands.len(), 3);
        assert_eq!(brands[0].value, Brand::Knitwell);
        assert_eq!(brands[1].label, "Chico's");
        assert_eq!(response.meta.unwrap().total, 3);
    }
}
