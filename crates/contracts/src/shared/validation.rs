//! Validaciones de formulario que el cliente aplica antes de llamar al API.
//! El backend vuelve a validar; esto sólo bloquea envíos obviamente inválidos.

/// Longitud mínima del nombre de un ítem de catálogo.
pub const NOMBRE_MIN_LEN: usize = 3;
/// Longitud mínima de usuario y de contraseña en el login.
pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 4;

pub fn nombre_valido(nombre: &str) -> bool {
    nombre.trim().chars().count() >= NOMBRE_MIN_LEN
}

/// Tasas de sistema de pensión (aporte, comisión, prima) en porcentaje.
pub fn tasa_valida(valor: f64) -> bool {
    (0.0..=100.0).contains(&valor)
}

pub fn dias_validos(valor: i32) -> bool {
    valor >= 0
}

pub fn horas_validas(valor: f64) -> bool {
    valor >= 0.0
}

pub fn username_valido(username: &str) -> bool {
    username.trim().chars().count() >= USERNAME_MIN_LEN
}

pub fn password_valida(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
}

/// Chequeo mínimo de forma `local@dominio.tld`.
pub fn email_valido(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, dominio)) => {
            !local.is_empty() && dominio.contains('.') && !dominio.starts_with('.') && !dominio.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nombre_corto_se_rechaza() {
        assert!(!nombre_valido(""));
        assert!(!nombre_valido("ab"));
        assert!(!nombre_valido("  a "));
        assert!(nombre_valido("Sol"));
        assert!(nombre_valido("Contador General"));
    }

    #[test]
    fn test_tasas_fuera_de_rango() {
        assert!(tasa_valida(0.0));
        assert!(tasa_valida(13.5));
        assert!(tasa_valida(100.0));
        assert!(!tasa_valida(-0.1));
        assert!(!tasa_valida(100.01));
    }

    #[test]
    fn test_contadores_de_asistencia() {
        assert!(dias_validos(0));
        assert!(dias_validos(31));
        assert!(!dias_validos(-1));
        assert!(horas_validas(0.0));
        assert!(horas_validas(12.5));
        assert!(!horas_validas(-2.0));
    }

    #[test]
    fn test_email_basico() {
        assert!(email_valido("ana@empresa.com"));
        assert!(!email_valido("ana@empresa"));
        assert!(!email_valido("@empresa.com"));
        assert!(!email_valido("ana.empresa.com"));
    }
}
