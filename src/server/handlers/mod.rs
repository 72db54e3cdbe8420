pub mod quotes;
pub mod vehicles;
