mod feedback;
mod relay;
mod service;

pub use feedback::*;
pub use relay::*;
pub use service::*;
