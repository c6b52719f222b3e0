pub mod errors;
pub mod generator;

pub use errors::SessionTokenError;
pub use generator::SessionTokenGenerator;
