//! Starter catalog for a fresh installation

use log::info;

use rust_decimal::Decimal;

use crate::domain::{DomainResult, NewProduct};

use super::ProductService;

/// Populate the product catalog with starter stock when it is empty.
/// Does nothing on an already-initialized store.
pub async fn seed_sample_products(products: &ProductService) -> DomainResult<()> {
    if !products.get_all().await.is_empty() {
        return Ok(());
    }

    let samples = vec![
        NewProduct {
            name: "iPhone Screen Replacement".to_string(),
            description: Some("High-quality iPhone screen replacement".to_string()),
            sku: "SCR-IP-001".to_string(),
            category: "Parts".to_string(),
            price: Decimal::new(15000, 2),
            cost: Some(Decimal::new(8000, 2)),
            stock: 10,
            min_stock: 3,
        },
        NewProduct {
            name: "Samsung Battery".to_string(),
            description: Some("Original Samsung battery".to_string()),
            sku: "BAT-SAM-001".to_string(),
            category: "Parts".to_string(),
            price: Decimal::new(5000, 2),
            cost: Some(Decimal::new(2500, 2)),
            stock: 15,
            min_stock: 5,
        },
        NewProduct {
            name: "Phone Case".to_string(),
            description: Some("Universal phone protective case".to_string()),
            sku: "ACC-CAS-001".to_string(),
            category: "Accessories".to_string(),
            price: Decimal::new(1500, 2),
            cost: Some(Decimal::new(500, 2)),
            stock: 50,
            min_stock: 10,
        },
        NewProduct {
            name: "Screen Protector".to_string(),
            description: Some("Tempered glass screen protector".to_string()),
            sku: "ACC-SCR-001".to_string(),
            category: "Accessories".to_string(),
            price: Decimal::new(1000, 2),
            cost: Some(Decimal::new(300, 2)),
            stock: 100,
            min_stock: 20,
        },
        NewProduct {
            name: "Charging Cable".to_string(),
            description: Some("USB-C charging cable".to_string()),
            sku: "ACC-CAB-001".to_string(),
            category: "Accessories".to_string(),
            price: Decimal::new(1200, 2),
            cost: Some(Decimal::new(400, 2)),
            stock: 30,
            min_stock: 10,
        },
    ];

    let count = samples.len();
    for sample in samples {
        products.create(sample).await?;
    }
    info!("Seeded {} sample products", count);
    Ok(())
}
