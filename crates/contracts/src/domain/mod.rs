pub mod asistencia;
pub mod cargo;
pub mod chat;
pub mod estado_civil;
pub mod genero;
pub mod planilla;
pub mod sistema_pension;
pub mod situacion_trabajador;
pub mod tipo_documento;
pub mod trabajador;
