mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login;
pub use login::LoginView;

mod hub;
pub use hub::HubView;

mod radar;
pub use radar::RadarView;

mod focus;
pub use focus::FocusView;

mod profile;
pub use profile::ProfileView;

/// Class for one option of a segmented control.
pub(crate) fn segmented_class(active: bool) -> &'static str {
    if active {
        "segmented__option segmented__option--active"
    } else {
        "segmented__option"
    }
}
