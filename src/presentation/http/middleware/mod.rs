pub mod site_origin;

pub use site_origin::{SiteOrigin, site_origin_cors};
