pub mod form;
pub mod list;

pub use form::{CargoFormCreate, CargoFormEdit, CargoFormView};
pub use list::CargoList;
