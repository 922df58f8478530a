pub mod address;
pub mod aggregate;
pub mod list;

pub use address::{Address, AddressBook, AddressValidationError};
pub use aggregate::{
    ChangePasswordDto, Customer, CustomerStats, ProfileDto, ProfileValidationError,
};
pub use list::customer_list_descriptor;
