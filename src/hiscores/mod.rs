pub mod categories;
pub mod client;
pub mod http;
pub mod parser;

pub use categories::{extract_kill_counts, tail_rows, TailRow, BOSS_ORDER};
pub use client::{HiscoreClientConfig, HiscoreSource};
pub use http::HiscoresClient;
pub use parser::{parse_rows, HiscoreRows, NO_DATA};

#[cfg(test)]
pub use client::MockHiscoreSource;
