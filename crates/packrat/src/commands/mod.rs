pub mod check;
pub mod copy;
