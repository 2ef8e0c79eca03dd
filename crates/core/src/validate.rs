//! Pre-submission form validation.
//!
//! A failed validation yields field-level messages and the request is never
//! sent; these mirror the schema checks the forms run before calling the
//! API.

use std::fmt;

use rust_decimal::Decimal;

/// A single failed field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Login form input.
#[derive(Debug, Clone, Copy)]
pub struct LoginForm<'a> {
    pub correo: &'a str,
    pub contrasena: &'a str,
}

/// Registration form input.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationForm<'a> {
    pub nombre: &'a str,
    pub correo: &'a str,
    pub contrasena: &'a str,
    pub telefono: Option<&'a str>,
}

/// Product create/update form input.
#[derive(Debug, Clone, Copy)]
pub struct ProductForm<'a> {
    pub nombre: &'a str,
    pub precio: Decimal,
    pub stock: i64,
    pub categoria_id: Option<i64>,
    pub estado_id: Option<i64>,
}

/// Validate a login form.
///
/// # Errors
///
/// Returns one [`FieldError`] per failing field.
pub fn validate_login(form: &LoginForm<'_>) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.correo.is_empty() {
        errors.push(FieldError {
            field: "correo",
            message: "Correo requerido",
        });
    } else if !is_email(form.correo) {
        errors.push(FieldError {
            field: "correo",
            message: "Correo inválido",
        });
    }

    if form.contrasena.is_empty() {
        errors.push(FieldError {
            field: "contrasena",
            message: "Contraseña requerida",
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a registration form.
///
/// # Errors
///
/// Returns one [`FieldError`] per failing field.
pub fn validate_registration(form: &RegistrationForm<'_>) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.nombre.is_empty() {
        errors.push(FieldError {
            field: "nombre",
            message: "Nombre requerido",
        });
    }

    if form.correo.is_empty() {
        errors.push(FieldError {
            field: "correo",
            message: "Correo requerido",
        });
    } else if !is_email(form.correo) {
        errors.push(FieldError {
            field: "correo",
            message: "Correo inválido",
        });
    }

    if form.contrasena.is_empty() {
        errors.push(FieldError {
            field: "contrasena",
            message: "Contraseña requerida",
        });
    }

    if let Some(telefono) = form.telefono
        && !is_phone(telefono)
    {
        errors.push(FieldError {
            field: "telefono",
            message: "Teléfono inválido",
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a product create/update form.
///
/// # Errors
///
/// Returns one [`FieldError`] per failing field.
pub fn validate_product(form: &ProductForm<'_>) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.nombre.is_empty() {
        errors.push(FieldError {
            field: "nombre",
            message: "Nombre requerido",
        });
    }

    if form.precio <= Decimal::ZERO {
        errors.push(FieldError {
            field: "precio",
            message: "Precio inválido",
        });
    }

    if form.stock < 0 {
        errors.push(FieldError {
            field: "stock",
            message: "Stock inválido",
        });
    }

    if form.categoria_id.is_none() {
        errors.push(FieldError {
            field: "categoria_id",
            message: "Categoría requerida",
        });
    }

    if form.estado_id.is_none() {
        errors.push(FieldError {
            field: "estado_id",
            message: "Estado requerido",
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Eight ASCII digits, the local phone number format.
fn is_phone(value: &str) -> bool {
    value.len() == 8 && value.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_login_passes() {
        let form = LoginForm {
            correo: "ana@tienda.gt",
            contrasena: "secreta",
        };

        assert_eq!(validate_login(&form), Ok(()));
    }

    #[test]
    fn empty_login_reports_both_fields() {
        let form = LoginForm {
            correo: "",
            contrasena: "",
        };

        let errors = validate_login(&form).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "correo");
        assert_eq!(errors[1].field, "contrasena");
    }

    #[test]
    fn malformed_email_is_rejected() {
        for correo in ["ana", "ana@", "@tienda.gt", "ana@tienda", "ana@.gt"] {
            let form = LoginForm {
                correo,
                contrasena: "secreta",
            };

            let errors = validate_login(&form).unwrap_err();

            assert_eq!(errors[0].message, "Correo inválido", "correo: {correo}");
        }
    }

    #[test]
    fn registration_rejects_bad_phone() {
        let form = RegistrationForm {
            nombre: "Ana",
            correo: "ana@tienda.gt",
            contrasena: "secreta",
            telefono: Some("1234"),
        };

        let errors = validate_registration(&form).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "telefono");
    }

    #[test]
    fn registration_accepts_eight_digit_phone() {
        let form = RegistrationForm {
            nombre: "Ana",
            correo: "ana@tienda.gt",
            contrasena: "secreta",
            telefono: Some("55512345"),
        };

        assert_eq!(validate_registration(&form), Ok(()));
    }

    #[test]
    fn registration_phone_is_optional() {
        let form = RegistrationForm {
            nombre: "Ana",
            correo: "ana@tienda.gt",
            contrasena: "secreta",
            telefono: None,
        };

        assert_eq!(validate_registration(&form), Ok(()));
    }

    #[test]
    fn product_form_requires_positive_price_and_references() {
        let form = ProductForm {
            nombre: "",
            precio: Decimal::ZERO,
            stock: -1,
            categoria_id: None,
            estado_id: None,
        };

        let errors = validate_product(&form).unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

        assert_eq!(
            fields,
            vec!["nombre", "precio", "stock", "categoria_id", "estado_id"]
        );
    }

    #[test]
    fn valid_product_form_passes() {
        let form = ProductForm {
            nombre: "Café",
            precio: Decimal::from(45),
            stock: 10,
            categoria_id: Some(2),
            estado_id: Some(1),
        };

        assert_eq!(validate_product(&form), Ok(()));
    }
}
