pub mod bct;
