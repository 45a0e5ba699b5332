pub mod items_service;
