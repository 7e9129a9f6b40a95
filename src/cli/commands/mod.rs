mod check_db;
mod hash_password;
mod issue_token;

pub use check_db::cmd_check_db;
pub use hash_password::cmd_hash_password;
pub use issue_token::cmd_issue_token;
