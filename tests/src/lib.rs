mod amf;
pub mod framework;

pub use amf::MockAmf;
