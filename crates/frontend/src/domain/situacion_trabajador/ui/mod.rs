pub mod form;
pub mod list;

pub use form::{SituacionTrabajadorFormCreate, SituacionTrabajadorFormEdit, SituacionTrabajadorFormView};
pub use list::SituacionTrabajadorList;
