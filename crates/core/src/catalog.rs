//! Catalog filtering and featured-product selection.

use std::time::Duration;

use rand::Rng;

use crate::products::Product;

/// How often the storefront rotates its featured product.
pub const FEATURED_ROTATION_INTERVAL: Duration = Duration::from_secs(5);

/// Keep only products visible to the storefront.
#[must_use]
pub fn active_products(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.estado.is_active())
        .cloned()
        .collect()
}

/// Filter a product list by exact category and case-insensitive name term.
///
/// Both filters are ANDed; an empty `term` or `category` matches everything.
/// Input order is preserved and the function is pure, so filtering an
/// already-filtered list with the same arguments returns the same products.
#[must_use]
pub fn filter_products(products: &[Product], term: &str, category: &str) -> Vec<Product> {
    let needle = term.to_lowercase();

    products
        .iter()
        .filter(|product| {
            let matches_category =
                category.is_empty() || product.categoria.as_deref() == Some(category);

            let matches_term =
                needle.is_empty() || product.nombre.to_lowercase().contains(&needle);

            matches_category && matches_term
        })
        .cloned()
        .collect()
}

/// Pick a featured product uniformly at random, or `None` on an empty list.
///
/// The RNG is injected so callers that need determinism can seed it.
pub fn pick_featured<'a, R: Rng>(products: &'a [Product], rng: &mut R) -> Option<&'a Product> {
    if products.is_empty() {
        return None;
    }

    products.get(rng.gen_range(0..products.len()))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal::Decimal;

    use crate::products::ProductStatus;

    use super::*;

    fn product(id: i64, nombre: &str, categoria: &str, estado: ProductStatus) -> Product {
        Product {
            id,
            nombre: nombre.to_string(),
            descripcion: None,
            precio: Decimal::from(10),
            stock: None,
            categoria: (!categoria.is_empty()).then(|| categoria.to_string()),
            imagen: None,
            estado,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Café molido", "Bebidas", ProductStatus::Activo),
            product(2, "Té verde", "Bebidas", ProductStatus::Activo),
            product(3, "Pan dulce", "Panadería", ProductStatus::Activo),
            product(4, "Cafetera", "Hogar", ProductStatus::Activo),
        ]
    }

    #[test]
    fn empty_term_and_category_return_everything_unchanged() {
        let products = fixture();

        let filtered = filter_products(&products, "", "");

        assert_eq!(filtered, products);
    }

    #[test]
    fn term_matches_name_case_insensitively() {
        let filtered = filter_products(&fixture(), "CaF", "");

        let names: Vec<&str> = filtered.iter().map(|p| p.nombre.as_str()).collect();

        assert_eq!(names, vec!["Café molido", "Cafetera"]);
    }

    #[test]
    fn category_matches_exactly() {
        let filtered = filter_products(&fixture(), "", "Bebidas");

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.categoria.as_deref() == Some("Bebidas")));
    }

    #[test]
    fn term_and_category_are_anded() {
        let filtered = filter_products(&fixture(), "café", "Bebidas");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].nombre, "Café molido");
    }

    #[test]
    fn filtering_is_idempotent_and_order_preserving() {
        let once = filter_products(&fixture(), "a", "");
        let twice = filter_products(&once, "a", "");

        assert_eq!(once, twice);

        let ids: Vec<i64> = once.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();

        sorted.sort_unstable();

        // fixture ids are already ascending, so order preservation shows up
        // as the filtered ids still being sorted
        assert_eq!(ids, sorted);
    }

    #[test]
    fn uncategorised_products_only_match_the_empty_category() {
        let products = vec![product(9, "Misc", "", ProductStatus::Activo)];

        assert_eq!(filter_products(&products, "", "").len(), 1);
        assert!(filter_products(&products, "", "Bebidas").is_empty());
    }

    #[test]
    fn active_products_drops_inactive_ones() {
        let products = vec![
            product(1, "Café", "Bebidas", ProductStatus::Activo),
            product(2, "Descontinuado", "Bebidas", ProductStatus::Inactivo),
        ];

        let active = active_products(&products);

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 1);
    }

    #[test]
    fn pick_featured_returns_none_on_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);

        assert!(pick_featured(&[], &mut rng).is_none());
    }

    #[test]
    fn pick_featured_returns_a_member_of_the_list() {
        let products = fixture();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..32 {
            let featured = pick_featured(&products, &mut rng);

            assert!(featured.is_some_and(|f| products.contains(f)));
        }
    }

    #[test]
    fn pick_featured_is_deterministic_for_a_fixed_seed() {
        let products = fixture();

        let first = pick_featured(&products, &mut StdRng::seed_from_u64(42)).map(|p| p.id);
        let second = pick_featured(&products, &mut StdRng::seed_from_u64(42)).map(|p| p.id);

        assert_eq!(first, second);
    }
}
