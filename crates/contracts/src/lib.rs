//! Tipos compartidos entre el frontend y la API REST de planillas.
//!
//! Todo lo que viaja por el wire vive aquí: DTOs de catálogos, trabajador,
//! asistencia, planilla mensual, chat y autenticación, más los helpers de
//! validación que el cliente aplica antes de enviar.

pub mod domain;
pub mod shared;
pub mod system;
