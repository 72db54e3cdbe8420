mod luggage;
mod quote;
mod stop;
mod vehicle;

pub use luggage::{LuggageCount, RegularLuggage};
pub use quote::Quote;
pub use stop::{AddressDetail, Stop};
pub use vehicle::VehicleAvailability;
