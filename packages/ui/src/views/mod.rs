mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod landing;
pub use landing::LandingView;
