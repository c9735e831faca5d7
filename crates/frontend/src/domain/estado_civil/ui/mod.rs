pub mod form;
pub mod list;

pub use form::{EstadoCivilFormCreate, EstadoCivilFormEdit, EstadoCivilFormView};
pub use list::EstadoCivilList;
