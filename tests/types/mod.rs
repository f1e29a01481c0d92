pub mod outcome;
pub mod wire;
