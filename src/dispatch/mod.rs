pub mod fleet;
pub mod validator;

pub use fleet::Fleet;
pub use validator::AssignmentValidator;
