pub mod create;
pub mod init;
