pub mod estado_badge;
pub mod page_frame;
pub mod pagination_controls;
