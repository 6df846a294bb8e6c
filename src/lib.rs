#![doc = include_str!("../README.md")]

mod failure;
pub use failure::*;

mod errlist;
pub use errlist::*;

mod collector;
pub use collector::*;
