//! First-boot catalog seeding.
//!
//! If the product table is empty the service seeds a fixed sample catalog;
//! otherwise it is a no-op. The insert runs in one transaction so a crash
//! mid-seed cannot leave a partially populated catalog.

use rust_decimal::Decimal;
use sqlx::PgPool;

use coral_core::{Product, ProductId};

use crate::db::{ProductRepository, RepositoryError};

/// The fixed five-product sample catalog.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Smartphone".to_string(),
            price: Decimal::new(69999, 2),
            description: "Latest model smartphone with a 6.5\" display".to_string(),
            image: "/static/images/products/smartphone.jpg".to_string(),
            stock: 50,
        },
        Product {
            id: ProductId::new(2),
            name: "Laptop".to_string(),
            price: Decimal::new(129999, 2),
            description: "Lightweight laptop with 16GB RAM".to_string(),
            image: "/static/images/products/laptop.jpg".to_string(),
            stock: 30,
        },
        Product {
            id: ProductId::new(3),
            name: "Wireless Headphones".to_string(),
            price: Decimal::new(19999, 2),
            description: "Noise-cancelling over-ear headphones".to_string(),
            image: "/static/images/products/headphones.jpg".to_string(),
            stock: 100,
        },
        Product {
            id: ProductId::new(4),
            name: "Smartwatch".to_string(),
            price: Decimal::new(24999, 2),
            description: "Fitness tracking smartwatch".to_string(),
            image: "/static/images/products/smartwatch.jpg".to_string(),
            stock: 75,
        },
        Product {
            id: ProductId::new(5),
            name: "Tablet".to_string(),
            price: Decimal::new(49999, 2),
            description: "10\" tablet for work and play".to_string(),
            image: "/static/images/products/tablet.jpg".to_string(),
            stock: 60,
        },
    ]
}

/// Seed the sample catalog if the table is empty.
///
/// Returns the number of products seeded (0 when the table already has
/// rows).
///
/// # Errors
///
/// Returns `RepositoryError` if the count or insert fails.
pub async fn seed_if_empty(pool: &PgPool) -> Result<usize, RepositoryError> {
    let repo = ProductRepository::new(pool);

    if repo.count().await? > 0 {
        tracing::debug!("Catalog already populated, skipping seed");
        return Ok(0);
    }

    let products = sample_products();
    repo.insert_all(&products).await?;
    tracing::info!(count = products.len(), "Seeded sample catalog");
    Ok(products.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_has_five_products_with_unique_ids() {
        let products = sample_products();
        assert_eq!(products.len(), 5);

        let mut ids: Vec<_> = products.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_sample_catalog_matches_documented_scenario() {
        let products = sample_products();
        let first = products.first().expect("seed catalog is non-empty");
        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(first.price, Decimal::new(69999, 2));
        assert_eq!(first.stock, 50);
    }
}
