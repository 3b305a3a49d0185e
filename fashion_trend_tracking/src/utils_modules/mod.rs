pub mod html_utils;
pub mod io_utils;
pub mod logger_utils;
