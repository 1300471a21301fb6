pub mod crc8;
pub mod gf2;
pub mod hamming74;
