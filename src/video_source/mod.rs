pub mod impl_fake;
#[cfg(feature = "vision")]
pub mod impl_opencv;
pub mod interface;
