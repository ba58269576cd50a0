mod layout;
pub use layout::{ProtectedLayout, PublicLayout};

mod login;
pub use login::Login;

mod hub;
pub use hub::Hub;

mod radar;
pub use radar::Radar;

mod focus;
pub use focus::Focus;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;
