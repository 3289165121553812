//! Trait seams between the core and its collaborators: the signing backend
//! and the four transport stubs.

pub mod signer;
pub mod transport;
