pub mod gf256;
