mod contact;
mod health_check;
mod services;

pub use contact::*;
pub use health_check::*;
pub use services::*;
