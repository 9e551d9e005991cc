pub mod character;
pub mod profile;
