//! Pure client-side logic: canonical byte encoding, the argument format,
//! value objects, and the error taxonomy. No I/O.

pub mod argument;
pub mod canonical;
pub mod errors;
pub mod proof;
pub mod result;
pub mod status;
