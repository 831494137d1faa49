pub mod controller;
pub mod inspector_app;
pub mod session;
pub mod views;

pub use controller::InspectionController;
pub use inspector_app::InspectorApp;
pub use session::{Session, SessionState};
