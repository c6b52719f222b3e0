pub mod note;
pub mod session;
pub mod user;

pub use note::SqliteNoteRepository;
pub use session::SqliteSessionRepository;
pub use user::SqliteUserRepository;
