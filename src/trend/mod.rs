pub mod chart;
pub mod page;
pub mod summary;

pub use chart::ChartPoint;
pub use page::{paginate, Pager};
pub use summary::{summarize, Trend, TrendSummary};
