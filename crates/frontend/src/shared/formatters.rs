//! Formateo de montos, fechas y períodos para la UI y la boleta.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Monto en soles con dos decimales: `S/ 1250.50`.
pub fn format_money(valor: f64) -> String {
    format!("S/ {:.2}", valor)
}

/// Fecha `dd/mm/yyyy`; `N/A` si no hay valor.
pub fn format_date(fecha: Option<NaiveDate>) -> String {
    match fecha {
        Some(f) => format!("{:02}/{:02}/{}", f.day(), f.month(), f.year()),
        None => "N/A".to_string(),
    }
}

pub fn format_datetime(fecha: Option<NaiveDateTime>) -> String {
    match fecha {
        Some(f) => format!(
            "{:02}/{:02}/{} {:02}:{:02}",
            f.day(),
            f.month(),
            f.year(),
            f.hour(),
            f.minute()
        ),
        None => "-".to_string(),
    }
}

pub fn nombre_mes(mes: u32) -> &'static str {
    match mes {
        1 => "Enero",
        2 => "Febrero",
        3 => "Marzo",
        4 => "Abril",
        5 => "Mayo",
        6 => "Junio",
        7 => "Julio",
        8 => "Agosto",
        9 => "Septiembre",
        10 => "Octubre",
        11 => "Noviembre",
        12 => "Diciembre",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "S/ 0.00");
        assert_eq!(format_money(1250.5), "S/ 1250.50");
        assert_eq!(format_money(0.005), "S/ 0.01");
    }

    #[test]
    fn test_format_date() {
        let fecha = NaiveDate::from_ymd_opt(2022, 11, 5);
        assert_eq!(format_date(fecha), "05/11/2022");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_format_datetime() {
        let fecha = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(8, 30, 0));
        assert_eq!(format_datetime(fecha), "01/03/2024 08:30");
        assert_eq!(format_datetime(None), "-");
    }

    #[test]
    fn test_nombre_mes() {
        assert_eq!(nombre_mes(1), "Enero");
        assert_eq!(nombre_mes(12), "Diciembre");
        assert_eq!(nombre_mes(0), "");
        assert_eq!(nombre_mes(13), "");
    }
}
