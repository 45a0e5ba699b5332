pub mod health_handlers;
pub mod items_handlers;
