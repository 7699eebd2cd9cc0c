pub mod activities;
pub mod check;
pub mod serve;
