pub mod celebs;
pub mod pagination;
pub mod serde_time;

pub use celebs::CelebSummaryDto;
pub use pagination::OffsetPage;
