mod degrees;
mod normalize;

pub use degrees::{acos_deg, asin_deg, atan2_deg, atan_deg, cos_deg, sin_deg, tan_deg};
pub use normalize::{clamp_dec, revd, revd_pm, revh};
