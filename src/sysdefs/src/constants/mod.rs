pub mod err_const;
pub mod fs_const;
pub mod log_const;
pub mod platform_const;
pub mod sys_const;
pub mod table;

pub use err_const::*;
pub use fs_const::*;
pub use log_const::*;
pub use platform_const::*;
pub use sys_const::*;
pub use table::*;
