use super::{Product, ProductCategory};

/// Client-side filter the listing view applies over the full catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: Option<ProductCategory>,
    pub search: String,
}

impl CatalogQuery {
    pub fn category(category: ProductCategory) -> Self {
        Self {
            category: Some(category),
            search: String::new(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Category must match when one is selected. The search text matches the
    /// name, and for livestock also breed, age, or gender, ignoring case.
    pub fn matches(&self, product: &Product) -> bool {
        if self.category.is_some_and(|category| category != product.category) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        if product.name.to_lowercase().contains(&needle) {
            return true;
        }
        match (&product.category, &product.livestock) {
            (ProductCategory::Livestock, Some(details)) => [&details.breed, &details.age, &details.gender]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle)),
            _ => false,
        }
    }

    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}
