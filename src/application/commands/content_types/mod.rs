mod definitions;
mod register;
mod service;

pub use definitions::{CELEB_TYPE_SLUG, celebrity_profile_type};
pub use register::{ContentTypeRegistration, RegisterContentTypeCommand, RegistrationOutcome};
pub use service::ContentTypeCommandService;
