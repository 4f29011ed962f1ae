pub mod assess;
pub mod import;
pub mod init;
pub mod signup;
pub mod site;
pub mod status;
