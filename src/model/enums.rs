mod app_type;
pub use self::app_type::*;

mod result_code;
pub use self::result_code::*;
