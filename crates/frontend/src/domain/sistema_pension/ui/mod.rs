pub mod form;
pub mod list;

pub use form::{SistemaPensionFormCreate, SistemaPensionFormEdit, SistemaPensionFormView};
pub use list::SistemaPensionList;
