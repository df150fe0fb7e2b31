//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de entrada antes de tocar la base de datos.

use validator::ValidationError;

/// Validar formato de matrícula (solo letras y números)
pub fn validate_number_plate(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        let mut error = ValidationError::new("number_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar teléfono (10 dígitos)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_number_plate() {
        assert!(validate_number_plate("KA01AB1234").is_ok());
        assert!(validate_number_plate("KA-01-AB").is_err());
        assert!(validate_number_plate("").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("98765").is_err());
        assert!(validate_phone("98765432ab").is_err());
    }
}
