pub mod date_utils;
pub mod local_store;
pub mod logging;
