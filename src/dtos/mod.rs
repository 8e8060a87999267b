pub mod admindtos;
pub mod propertydtos;
