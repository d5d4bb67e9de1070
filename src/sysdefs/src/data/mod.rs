pub mod pwd_struct;
pub mod sys_struct;

pub use pwd_struct::*;
pub use sys_struct::*;
