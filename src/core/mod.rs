/*
* Re-export submodules for application bootstrap: logging and server setup.
*/

pub mod logging;
pub mod server;
