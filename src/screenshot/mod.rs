// Screenshot pipeline — locate, capture, resample, encode, enumerate.

pub mod bitmap;
pub mod capture;
pub mod encode;
pub mod error;
pub mod list;
pub mod locate;
pub mod resample;
