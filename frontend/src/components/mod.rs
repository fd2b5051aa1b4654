pub mod cookie_banner;
pub mod wheel;

pub use cookie_banner::CookieBanner;
pub use wheel::SpinWheel;
