// Domain model module
// Film and User records with their validation rules

pub mod film;
pub mod user;

pub use film::Film;
pub use user::User;
