//! Pure statistics over a salary sample. Nothing in here touches a display.
//!
//! - [`describe`]: mean, percentiles and the printed [`describe::Summary`]
//! - [`histogram`]: density-normalized equal-width histogram
//! - [`normal`]: population standard deviation and the fitted normal curve

pub mod describe;
pub mod histogram;
pub mod normal;
