//! Generación de la boleta de pago imprimible.
//!
//! Documento HTML fijo armado por interpolación de un único registro de
//! planilla. Sin motor de plantillas y sin cálculo: todo monto ausente se
//! imprime como `S/ 0.00` y todo texto ausente como `N/A`.

use contracts::domain::planilla::PlanillaPorDocumentoDto;
use contracts::domain::trabajador::TrabajadorResponse;

use crate::shared::formatters::{format_date, format_money, nombre_mes};

pub struct BoletaDatos<'a> {
    pub anio: i32,
    pub mes: u32,
    pub documento: &'a str,
    pub boleta: &'a PlanillaPorDocumentoDto,
    /// Datos de cabecera del trabajador; si la boleta ya los trae, tienen
    /// prioridad los de la boleta.
    pub trabajador: Option<&'a TrabajadorResponse>,
}

fn fila_monto(etiqueta: &str, valor: f64) -> String {
    format!(
        "<tr><td>{}</td><td class=\"monto\">{}</td></tr>\n",
        etiqueta,
        format_money(valor)
    )
}

fn fila_total(etiqueta: &str, valor: f64) -> String {
    format!(
        "<tr><td>{}</td><td class=\"monto\"><strong>{}</strong></td></tr>\n",
        etiqueta,
        format_money(valor)
    )
}

pub fn generar_html_boleta(datos: &BoletaDatos<'_>) -> String {
    let boleta = datos.boleta;
    let planilla = &boleta.planilla;
    let trabajador = planilla.trabajador.as_ref().or(datos.trabajador);

    let nombre_completo = trabajador
        .map(|t| t.nombre_completo())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "N/A".to_string());
    let cargo = trabajador
        .and_then(|t| t.cargo.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let fec_ingreso = format_date(trabajador.and_then(|t| t.fec_ingreso));

    let mut ingresos = String::new();
    ingresos.push_str(&fila_monto("Rem. Básico", planilla.haber_basico));
    ingresos.push_str(&fila_monto("Asig. Familiar", boleta.vasig_familiar));
    ingresos.push_str(&fila_monto("Horas Extras 25%", boleta.vhoras_extra1));
    ingresos.push_str(&fila_monto("Horas Extras 35%", boleta.vhoras_extra2));
    ingresos.push_str(&fila_monto("Días Feriados", boleta.vferiado_trab));
    ingresos.push_str(&fila_monto("Vales", planilla.vales_empleado));
    ingresos.push_str(&fila_monto("Bonificación Cargo", planilla.bonificacion_cargo));
    ingresos.push_str(&fila_total("Total Ingresos", planilla.total_ingreso));

    let mut descuentos = String::new();
    descuentos.push_str(&fila_monto("Aporte", planilla.aporte));
    descuentos.push_str(&fila_monto("Comisión", planilla.comision));
    descuentos.push_str(&fila_monto("Prima", planilla.prima));
    descuentos.push_str(&fila_total("Total Descuentos", planilla.total_descuento));

    let mut aportes = String::new();
    aportes.push_str(&fila_monto("ESSALUD", planilla.es_salud));
    aportes.push_str(&fila_monto("Seguro Vida Ley", planilla.seguro_vida_ley));
    aportes.push_str(&fila_total("Total Empleador", planilla.total_aporte_empleador()));

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Boleta de Pago</title>
<style>
    body {{ font-family: Arial, sans-serif; margin: 0; padding: 0; font-size: 14px; }}
    .boleta {{ width: 800px; margin: 0 auto; padding: 20px; border: 1px solid #ccc; }}
    header {{ display: flex; justify-content: space-between; align-items: center; border-bottom: 2px solid #000; padding-bottom: 10px; margin-bottom: 15px; }}
    header h1 {{ font-size: 20px; color: #0046ad; margin: 0; }}
    header h1 span {{ color: orange; }}
    .empresa-info p, .trabajador-info p {{ margin: 5px 0; }}
    .detalles {{ display: flex; justify-content: space-between; gap: 10px; margin-top: 15px; }}
    .detalles div {{ flex: 1; }}
    .detalles h3 {{ background-color: #f0f0f0; padding: 5px; margin: 0 0 10px 0; text-align: center; }}
    .detalles table {{ width: 100%; border-collapse: collapse; }}
    .detalles table td {{ padding: 4px; border-bottom: 1px solid #ccc; }}
    .detalles table tr:last-child td {{ border-bottom: 2px solid #000; font-weight: bold; }}
    .monto {{ text-align: right; }}
    .resumen {{ margin-top: 15px; }}
    footer {{ text-align: center; margin-top: 30px; padding-top: 10px; border-top: 1px solid #ccc; }}
    @media print {{
        body {{ margin: 0; }}
        .boleta {{ border: none; width: 100%; padding: 10px; }}
    }}
</style>
</head>
<body>
<div class="boleta">
    <header>
        <div class="empresa-info">
            <h1>BOLETA DE PAGO <span>{mes_nombre}/{anio}</span></h1>
            <p><strong>Razón Social:</strong> Nombre Empresa Contratada</p>
            <p><strong>Dirección:</strong> Dirección Empresa Contratada</p>
            <p><strong>NIT:</strong> 25263987456 &nbsp; <strong>Reg. Patronal:</strong> 070710-00156</p>
        </div>
        <div class="empresa-logo">
            <p>D.S. N° 001-98-TR del 22/01/1998</p>
        </div>
    </header>

    <section class="trabajador-info">
        <h2>Trabajador</h2>
        <p><strong>Trabajador:</strong> {documento} - {nombre_completo}</p>
        <p><strong>Fecha Ingreso:</strong> {fec_ingreso}</p>
        <p><strong>Cargo:</strong> {cargo}</p>
        <p><strong>Días Trab.:</strong> {ndias_trab} &nbsp; <strong>Horas:</strong> {nhoras_normal}</p>
    </section>

    <section class="detalles">
        <div class="ingresos">
            <h3>Ingresos</h3>
            <table>
{ingresos}            </table>
        </div>

        <div class="descuentos">
            <h3>Descuentos de Ley</h3>
            <table>
{descuentos}            </table>
        </div>

        <div class="aportes">
            <h3>Aportes del Empleador</h3>
            <table>
{aportes}            </table>
        </div>
    </section>

    <section class="resumen">
        <h3>Resumen</h3>
        <p><strong>Neto a Pagar:</strong> {neto}</p>
        <p><strong>Son:</strong> {neto_letras}</p>
    </section>

    <footer>
        <p><strong>Sistema de Planillas</strong></p>
        <p>Recibí Conforme: <span>____________</span> DNI: <span>____________</span></p>
    </footer>
</div>
<script>window.onload = function () {{ window.print(); }};</script>
</body>
</html>"#,
        mes_nombre = nombre_mes(datos.mes),
        anio = datos.anio,
        documento = datos.documento,
        nombre_completo = nombre_completo,
        fec_ingreso = fec_ingreso,
        cargo = cargo,
        ndias_trab = boleta.ndias_trab,
        nhoras_normal = boleta.nhoras_normal,
        ingresos = ingresos,
        descuentos = descuentos,
        aportes = aportes,
        neto = format_money(planilla.total_neto_boleta),
        neto_letras = boleta.total_neto_boleta_cad,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::planilla::PlanillaMensualResponse;

    #[test]
    fn test_boleta_sin_montos_imprime_ceros() {
        // Registro totalmente disperso: cada línea monetaria debe salir
        // como "S/ 0.00" y nada debe faltar.
        let boleta = PlanillaPorDocumentoDto::default();
        let datos = BoletaDatos {
            anio: 2024,
            mes: 6,
            documento: "45879632",
            boleta: &boleta,
            trabajador: None,
        };
        let html = generar_html_boleta(&datos);

        // 8 líneas de ingresos + 4 de descuentos + 3 de aportes + neto
        assert_eq!(html.matches("S/ 0.00").count(), 16);
        assert!(html.contains("Junio/2024"));
        assert!(html.contains("45879632 - N/A"));
        assert!(html.contains("<strong>Cargo:</strong> N/A"));
        assert!(html.contains("<strong>Fecha Ingreso:</strong> N/A"));
        assert!(!html.contains("NaN"));
    }

    #[test]
    fn test_boleta_interpola_montos_y_cabecera() {
        let boleta = PlanillaPorDocumentoDto {
            planilla: PlanillaMensualResponse {
                anio: 2024,
                mes: 3,
                haber_basico: 1800.0,
                total_ingreso: 2050.5,
                total_descuento: 234.0,
                es_salud: 162.0,
                seguro_vida_ley: 9.5,
                total_neto_boleta: 1816.5,
                ..Default::default()
            },
            vasig_familiar: 102.5,
            total_neto_boleta_cad: "SON: UN MIL OCHOCIENTOS DIECISÉIS Y 50/100 SOLES".into(),
            ndias_trab: 22,
            nhoras_normal: 176.0,
            ..Default::default()
        };
        let datos = BoletaDatos {
            anio: 2024,
            mes: 3,
            documento: "41256387",
            boleta: &boleta,
            trabajador: None,
        };
        let html = generar_html_boleta(&datos);

        assert!(html.contains("Marzo/2024"));
        assert!(html.contains("S/ 1800.00"));
        assert!(html.contains("S/ 102.50"));
        // Total empleador = ESSALUD + Seguro Vida Ley
        assert!(html.contains("S/ 171.50"));
        assert!(html.contains("S/ 1816.50"));
        assert!(html.contains("SON: UN MIL OCHOCIENTOS DIECISÉIS Y 50/100 SOLES"));
        assert!(html.contains("<strong>Días Trab.:</strong> 22"));
    }

    #[test]
    fn test_boleta_prefiere_el_trabajador_embebido() {
        use chrono::NaiveDate;

        let embebido = TrabajadorResponse {
            id_trabajador: 1,
            documento: "41256387".into(),
            nombres: "Rosa".into(),
            apellido_paterno: "Mendoza".into(),
            apellido_materno: "Paz".into(),
            direccion: String::new(),
            email: String::new(),
            hijos: 0,
            fec_nacimiento: None,
            fec_ingreso: NaiveDate::from_ymd_opt(2020, 1, 15),
            activo: true,
            fec_creacion: None,
            tipo_documento: None,
            genero: None,
            estado_civil: None,
            cargo: Some("Analista".into()),
            situacion: None,
            sistema_pension: None,
        };
        let boleta = PlanillaPorDocumentoDto {
            planilla: PlanillaMensualResponse {
                trabajador: Some(embebido),
                ..Default::default()
            },
            ..Default::default()
        };
        let datos = BoletaDatos {
            anio: 2024,
            mes: 1,
            documento: "41256387",
            boleta: &boleta,
            trabajador: None,
        };
        let html = generar_html_boleta(&datos);

        assert!(html.contains("Rosa Mendoza Paz"));
        assert!(html.contains("<strong>Cargo:</strong> Analista"));
        assert!(html.contains("15/01/2020"));
    }
}
