// Storage module
// Identity-keyed in-memory collections for films and users

pub mod films;
pub mod users;

pub use films::InMemoryFilmStorage;
pub use users::InMemoryUserStorage;
