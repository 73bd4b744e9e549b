//! Command implementations.

pub mod methods;
pub mod recommend;
pub mod show;

pub use self::methods::execute_methods;
pub use self::recommend::execute_recommend;
pub use self::show::execute_show;
