pub mod filler;
