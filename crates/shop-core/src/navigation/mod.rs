use std::fmt;
use thiserror::Error;

use crate::product::ProductId;

mod router;

pub use router::{Router, RouteChange};

/// Path prefix of product detail routes
const PRODUCT_PREFIX: &str = "/product/";

/// Client-side routes of the storefront
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Catalog,
    /// `/product/{id}`
    Product(ProductId),
}

/// Errors produced while resolving a path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches path '{0}'")]
    Unmatched(String),
}

impl Route {
    /// Resolve a navigation path. A single trailing slash is tolerated.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if rest.len() > 1 => rest,
            _ => trimmed,
        };

        if normalized == "/" {
            return Ok(Route::Catalog);
        }

        match normalized.strip_prefix(PRODUCT_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => {
                Ok(Route::Product(ProductId::new(id)))
            }
            _ => Err(RouteError::Unmatched(path.to_string())),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::Product(id) => format!("{}{}", PRODUCT_PREFIX, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Ok(Route::Catalog));
        assert_eq!(Route::parse("/product/12"), Ok(Route::Product(ProductId::from(12))));
        assert_eq!(
            Route::parse("/product/sku-4/"),
            Ok(Route::Product(ProductId::new("sku-4")))
        );
    }

    #[test]
    fn test_parse_rejects_other_paths() {
        for path in ["", "//", "///", "/products", "/product/", "/product/1/reviews", "/about"] {
            assert_eq!(
                Route::parse(path),
                Err(RouteError::Unmatched(path.to_string())),
                "path {:?}",
                path
            );
        }
    }

    #[test]
    fn test_path_round_trips() {
        let route = Route::Product(ProductId::new("7"));
        assert_eq!(route.path(), "/product/7");
        assert_eq!(Route::parse(&route.path()), Ok(route));
        assert_eq!(Route::Catalog.to_string(), "/");
    }
}
