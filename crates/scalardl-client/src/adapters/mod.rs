//! Concrete implementations of the port seams: the ECDSA signing backend and
//! the default status decoder.

pub mod ecdsa;
pub mod status;
