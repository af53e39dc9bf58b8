//! Static product catalog.
//!
//! The catalog is a fixed ordered sequence of products defined at process
//! start. There is no inventory backend; products never change while the
//! server runs.

use shopverse_core::{ProductId, Rating};

/// Product categories with a dedicated page each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Fashion,
}

impl Category {
    /// Parse from a URL path segment.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "electronics" => Some(Self::Electronics),
            "fashion" => Some(Self::Fashion),
            _ => None,
        }
    }

    /// Convert to the URL path segment / storage value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Fashion => "fashion",
        }
    }

    /// Human-readable page title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
        }
    }
}

/// A catalog product.
///
/// `price` and `mrp` are whole rupees. `mrp >= price` is not enforced by
/// the type; seed data keeps it true so the discount badge stays sane.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Selling price in whole currency units.
    pub price: i64,
    /// Manufacturer recommended price, same units. Must be > 0.
    pub mrp: i64,
    pub brand: String,
    pub rating: Rating,
    pub category: Category,
    /// Path to the product image under `/static`.
    pub image: String,
    /// External purchase URL; opaque to the storefront.
    pub purchase_link: String,
}

/// The fixed product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Number of products shown on the home page.
    pub const HOME_PAGE_SIZE: usize = 8;

    /// Build the seed catalog.
    #[must_use]
    pub fn seed() -> Self {
        let products = vec![
            product(
                "p1",
                "Smartphone X1",
                59_999,
                74_999,
                "NovaTech",
                4.5,
                Category::Electronics,
            ),
            product(
                "p2",
                "Noise Cancelling Headphones",
                8_999,
                12_999,
                "SoundHive",
                4.2,
                Category::Electronics,
            ),
            product(
                "p3",
                "4K Ultra TV 55\"",
                42_999,
                58_999,
                "ViewMax",
                4.7,
                Category::Electronics,
            ),
            product(
                "p4",
                "Soundbar Cinema S40",
                6_999,
                9_999,
                "SoundHive",
                4.4,
                Category::Electronics,
            ),
            product(
                "p5",
                "Sneakers Apex",
                2_999,
                4_999,
                "Stride",
                4.1,
                Category::Fashion,
            ),
            product(
                "p6",
                "Classic Denim Jacket",
                2_199,
                3_299,
                "BlueStone",
                4.3,
                Category::Fashion,
            ),
            product(
                "p7",
                "Analog Watch Luxe",
                3_499,
                5_799,
                "Chrono",
                4.0,
                Category::Fashion,
            ),
            product(
                "p8",
                "Wireless Earbuds AirGo",
                2_799,
                4_599,
                "SoundHive",
                4.2,
                Category::Electronics,
            ),
        ];
        Self { products }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// The first `n` products, in catalog order (home page set).
    pub fn featured(&self, n: usize) -> impl Iterator<Item = &Product> {
        self.products.iter().take(n)
    }

    /// All products in a category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Distinct brand names, in first-seen catalog order (sidebar facets).
    #[must_use]
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for p in &self.products {
            if !brands.contains(&p.brand) {
                brands.push(p.brand.clone());
            }
        }
        brands
    }

    /// Total number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn product(
    id: &str,
    title: &str,
    price: i64,
    mrp: i64,
    brand: &str,
    rating: f32,
    category: Category,
) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        price,
        mrp,
        brand: brand.to_owned(),
        rating: Rating::clamped(rating),
        category,
        image: format!("/static/images/{id}.svg"),
        purchase_link: format!("https://example.com/buy?product={id}"),
    }
}
