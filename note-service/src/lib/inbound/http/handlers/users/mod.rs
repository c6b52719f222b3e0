pub mod profile;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

pub use profile::profile;
pub use sign_in::sign_in;
pub use sign_out::sign_out;
pub use sign_up::sign_up;
