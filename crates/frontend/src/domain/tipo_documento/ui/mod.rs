pub mod form;
pub mod list;

pub use form::{TipoDocumentoFormCreate, TipoDocumentoFormEdit, TipoDocumentoFormView};
pub use list::TipoDocumentoList;
