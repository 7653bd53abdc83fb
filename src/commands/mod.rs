pub mod employees;
pub mod init;
pub mod rank;
pub mod status;
pub mod weights;
