use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub sessions: usize,
    pub accounts: usize,
    pub logins: usize,
    pub online_users: usize,
}
