pub mod pagination;
pub mod password;
