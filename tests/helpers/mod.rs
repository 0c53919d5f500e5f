#![allow(dead_code)]

mod random;

pub use self::brute::{brute_force, Found};
pub use self::random::Generator;
