pub mod client;
pub mod plant_identifier;
