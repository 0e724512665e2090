mod operation;
mod transit_app;
mod transit_app_error;

pub use operation::TransitOperation;
pub use transit_app::TransitApp;
pub use transit_app_error::TransitAppError;
