pub mod algorithm;
pub mod calculator;
pub mod ranks;
pub mod weights;

pub use algorithm::compute_points;
pub use calculator::PointsCalculator;
pub use ranks::{rank_name, ClanRank, RANK_THRESHOLDS};
pub use weights::PointsTable;
