//! Estado de la grilla de asistencias.
//!
//! La edición en línea sigue la máquina `viendo → editando → (guardado |
//! cancelado) → viendo` por fila. Al entrar a edición se toma una foto
//! inmutable de los seis contadores en una tabla lateral; cancelar la
//! restituye en bloque y guardar la descarta.

use std::collections::HashMap;

use contracts::domain::asistencia::{AsistenciaTrabajadorDto, AsistenciaTrabajadorResponse};

/// Foto de los seis campos editables de una fila.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotAsistencia {
    pub dias_laborales: i32,
    pub dias_descanso: i32,
    pub dias_inasistencia: i32,
    pub dias_feriados: i32,
    pub horas_extra25: f64,
    pub horas_extra35: f64,
}

impl SnapshotAsistencia {
    fn capturar(fila: &AsistenciaTrabajadorResponse) -> Self {
        Self {
            dias_laborales: fila.dias_laborales,
            dias_descanso: fila.dias_descanso,
            dias_inasistencia: fila.dias_inasistencia,
            dias_feriados: fila.dias_feriados,
            horas_extra25: fila.horas_extra25,
            horas_extra35: fila.horas_extra35,
        }
    }

    fn restaurar(&self, fila: &mut AsistenciaTrabajadorResponse) {
        fila.dias_laborales = self.dias_laborales;
        fila.dias_descanso = self.dias_descanso;
        fila.dias_inasistencia = self.dias_inasistencia;
        fila.dias_feriados = self.dias_feriados;
        fila.horas_extra25 = self.horas_extra25;
        fila.horas_extra35 = self.horas_extra35;
    }
}

#[derive(Debug, Clone, Default)]
pub struct AsistenciaGrid {
    pub rows: Vec<AsistenciaTrabajadorResponse>,
    /// Fotos por id de asistencia de las filas actualmente en edición.
    snapshots: HashMap<i64, SnapshotAsistencia>,
    /// Quedan ediciones confirmadas sin enviar al backend.
    pub has_unsaved_changes: bool,
}

impl AsistenciaGrid {
    /// Reemplaza toda la grilla (búsqueda nueva o carga de Excel);
    /// descarta cualquier edición en curso.
    pub fn replace(&mut self, rows: Vec<AsistenciaTrabajadorResponse>) {
        self.rows = rows;
        self.snapshots.clear();
        self.has_unsaved_changes = false;
    }

    pub fn is_editing(&self, id_asistencia: i64) -> bool {
        self.snapshots.contains_key(&id_asistencia)
    }

    pub fn any_editing(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// `viendo → editando`: captura la foto de la fila.
    pub fn begin_edit(&mut self, id_asistencia: i64) {
        if self.snapshots.contains_key(&id_asistencia) {
            return;
        }
        if let Some(fila) = self.rows.iter().find(|r| r.id_asistencia == id_asistencia) {
            self.snapshots
                .insert(id_asistencia, SnapshotAsistencia::capturar(fila));
        }
    }

    /// `editando → cancelado`: restituye la foto completa y la descarta.
    pub fn cancel_edit(&mut self, id_asistencia: i64) {
        if let Some(snapshot) = self.snapshots.remove(&id_asistencia) {
            if let Some(fila) = self
                .rows
                .iter_mut()
                .find(|r| r.id_asistencia == id_asistencia)
            {
                snapshot.restaurar(fila);
            }
        }
    }

    /// `editando → guardado`: valida los seis contadores (≥ 0); si pasan,
    /// descarta la foto y marca cambios pendientes. Si no, la fila sigue
    /// en edición.
    pub fn commit_edit(&mut self, id_asistencia: i64) -> bool {
        let valido = self
            .rows
            .iter()
            .find(|r| r.id_asistencia == id_asistencia)
            .map(|r| r.contadores_validos())
            .unwrap_or(false);
        if !valido {
            return false;
        }
        self.snapshots.remove(&id_asistencia);
        self.has_unsaved_changes = true;
        true
    }

    /// Aplica una edición de campo sobre la fila (sólo mientras edita).
    pub fn update_row<F>(&mut self, id_asistencia: i64, f: F)
    where
        F: FnOnce(&mut AsistenciaTrabajadorResponse),
    {
        if !self.is_editing(id_asistencia) {
            return;
        }
        if let Some(fila) = self
            .rows
            .iter_mut()
            .find(|r| r.id_asistencia == id_asistencia)
        {
            f(fila);
        }
    }

    /// Payload del guardado masivo: TODAS las filas visibles, editadas o
    /// no, etiquetadas con el período del filtro activo.
    pub fn to_save_payload(&self, anio: i32, mes: u32) -> Vec<AsistenciaTrabajadorDto> {
        self.rows.iter().map(|r| r.to_dto(anio, mes)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila(id: i64) -> AsistenciaTrabajadorResponse {
        AsistenciaTrabajadorResponse {
            id_asistencia: id,
            id_trabajador: id * 10,
            documento: format!("documento-{}", id),
            nombre: format!("Trabajador {}", id),
            dias_laborales: 22,
            dias_descanso: 8,
            dias_inasistencia: 0,
            dias_feriados: 1,
            horas_extra25: 2.5,
            horas_extra35: 0.0,
        }
    }

    fn grid_con(ids: &[i64]) -> AsistenciaGrid {
        let mut grid = AsistenciaGrid::default();
        grid.replace(ids.iter().map(|&i| fila(i)).collect());
        grid
    }

    #[test]
    fn test_cancelar_restaura_exactamente_los_seis_campos() {
        let mut grid = grid_con(&[1]);
        grid.begin_edit(1);
        grid.update_row(1, |r| {
            r.dias_laborales = 15;
            r.dias_descanso = 2;
            r.dias_inasistencia = 5;
            r.dias_feriados = 0;
            r.horas_extra25 = 9.0;
            r.horas_extra35 = 3.5;
        });

        grid.cancel_edit(1);

        let original = fila(1);
        assert_eq!(grid.rows[0], original);
        assert!(!grid.is_editing(1));
        assert!(!grid.has_unsaved_changes);
    }

    #[test]
    fn test_cancelar_no_toca_los_campos_no_editables() {
        let mut grid = grid_con(&[1]);
        grid.begin_edit(1);
        grid.update_row(1, |r| r.dias_laborales = 10);
        grid.cancel_edit(1);
        assert_eq!(grid.rows[0].documento, "documento-1");
        assert_eq!(grid.rows[0].nombre, "Trabajador 1");
        assert_eq!(grid.rows[0].id_trabajador, 10);
    }

    #[test]
    fn test_guardar_valida_y_descarta_la_foto() {
        let mut grid = grid_con(&[1]);
        grid.begin_edit(1);
        grid.update_row(1, |r| r.horas_extra25 = 6.0);

        assert!(grid.commit_edit(1));
        assert!(!grid.is_editing(1));
        assert!(grid.has_unsaved_changes);
        assert_eq!(grid.rows[0].horas_extra25, 6.0);
    }

    #[test]
    fn test_guardar_con_negativos_mantiene_la_edicion() {
        let mut grid = grid_con(&[1]);
        grid.begin_edit(1);
        grid.update_row(1, |r| r.dias_inasistencia = -3);

        assert!(!grid.commit_edit(1));
        assert!(grid.is_editing(1));
        assert!(!grid.has_unsaved_changes);
    }

    #[test]
    fn test_no_se_edita_sin_begin_edit() {
        let mut grid = grid_con(&[1]);
        grid.update_row(1, |r| r.dias_laborales = 99);
        assert_eq!(grid.rows[0].dias_laborales, 22);
    }

    #[test]
    fn test_payload_incluye_todas_las_filas_con_el_periodo_del_filtro() {
        let mut grid = grid_con(&[1, 2, 3]);
        // Sólo se edita la fila 2; el guardado masivo igual manda las tres.
        grid.begin_edit(2);
        grid.update_row(2, |r| r.dias_laborales = 18);
        grid.commit_edit(2);

        let payload = grid.to_save_payload(2024, 3);
        assert_eq!(payload.len(), 3);
        assert!(payload.iter().all(|d| d.anio == 2024 && d.mes == 3));
        assert_eq!(payload[1].dias_laborales, 18);
        assert_eq!(payload[0].dias_laborales, 22);
        assert_eq!(payload[0].id_asistencia, Some(1));
    }

    #[test]
    fn test_replace_descarta_ediciones_en_curso() {
        let mut grid = grid_con(&[1]);
        grid.begin_edit(1);
        grid.replace(vec![fila(7)]);
        assert!(!grid.any_editing());
        assert!(!grid.has_unsaved_changes);
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0].id_asistencia, 7);
    }
}
