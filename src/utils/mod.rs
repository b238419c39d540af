/*
    * Re-exports for all utility modules like error handling,
    * response formats, middleware wrappers, etc.
*/

pub mod error_handler;
pub mod response_handler;
