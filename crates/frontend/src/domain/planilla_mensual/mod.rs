pub mod api;
pub mod boleta_html;
pub mod ui;
