pub mod acc;
pub mod info;
pub mod login;
pub mod msg;
pub mod name;
pub mod passwd;
pub mod quit;
pub mod traits;
pub mod unknown;
pub mod who;
