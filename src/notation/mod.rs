mod moves;
mod position;

pub use moves::{decrypt, encrypt, MoveString};
pub use position::{decode, encode};
