pub mod impl_fake;
#[cfg(feature = "vision")]
pub mod impl_haar;
pub mod interface;
