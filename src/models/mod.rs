pub mod adminmodel;
pub mod propertymodel;
