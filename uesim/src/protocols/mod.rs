pub mod nas;
pub mod ngap;
