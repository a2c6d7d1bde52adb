pub mod convert;
pub mod scan;
