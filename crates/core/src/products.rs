//! Product and category read models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a product. Only active products reach the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Activo,
    Inactivo,
}

impl ProductStatus {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Activo)
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activo => f.write_str("Activo"),
            Self::Inactivo => f.write_str("Inactivo"),
        }
    }
}

/// Product read model as served by `/productos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub nombre: String,

    #[serde(default)]
    pub descripcion: Option<String>,

    pub precio: Decimal,

    #[serde(default)]
    pub stock: Option<i64>,

    /// Category display name; absent on uncategorised products.
    #[serde(default)]
    pub categoria: Option<String>,

    #[serde(default)]
    pub imagen: Option<String>,

    pub estado: ProductStatus,
}

/// Payload for creating a product in the back office.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: Decimal,
    pub stock: i64,
    pub categoria_id: i64,
    pub estado_id: i64,
    pub imagen: Option<String>,
}

/// Payload for updating an existing product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductUpdate {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: Decimal,
    pub stock: i64,
    pub categoria_id: i64,
    pub estado_id: i64,
    pub imagen: Option<String>,
}

/// Category read model as served by `/categorias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub nombre: String,

    #[serde(default)]
    pub estado: Option<String>,
}

/// Payload for creating or updating a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub nombre: String,
    pub estado_id: i64,
}

/// Entry in the shared status catalog (`/estados`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub id: i64,
    pub descripcion: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_decodes_wire_shape() -> TestResult {
        let json = r#"{
            "id": 7,
            "nombre": "Café molido",
            "descripcion": "500g",
            "precio": 45.5,
            "stock": 12,
            "categoria": "Bebidas",
            "imagen": "cafe.png",
            "estado": "Activo"
        }"#;

        let product: Product = serde_json::from_str(json)?;

        assert_eq!(product.id, 7);
        assert_eq!(product.nombre, "Café molido");
        assert_eq!(product.precio, Decimal::new(455, 1));
        assert_eq!(product.categoria.as_deref(), Some("Bebidas"));
        assert!(product.estado.is_active());

        Ok(())
    }

    #[test]
    fn product_decodes_without_optional_fields() -> TestResult {
        let json = r#"{"id": 1, "nombre": "Pan", "precio": "3.00", "estado": "Inactivo"}"#;

        let product: Product = serde_json::from_str(json)?;

        assert_eq!(product.descripcion, None);
        assert_eq!(product.categoria, None);
        assert!(!product.estado.is_active());

        Ok(())
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{"id": 1, "nombre": "Pan", "precio": 1, "estado": "Suspendido"}"#;

        let result = serde_json::from_str::<Product>(json);

        assert!(result.is_err(), "expected decode failure, got {result:?}");
    }

    #[test]
    fn status_entry_decodes() -> TestResult {
        let entries: Vec<StatusEntry> =
            serde_json::from_str(r#"[{"id": 1, "descripcion": "Activo"}]"#)?;

        assert_eq!(entries.len(), 1);

        Ok(())
    }
}
