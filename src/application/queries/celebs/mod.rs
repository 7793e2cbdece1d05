mod list;
mod service;

pub use list::ListCelebsQuery;
pub use service::CelebQueryService;
