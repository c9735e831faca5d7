pub mod boleta;
pub mod list;

pub use boleta::BoletaModal;
pub use list::PlanillaMensualList;
