pub mod nickname;

pub use nickname::{build_nickname, parse_alts, DEFAULT_NICKNAME_LIMIT};
