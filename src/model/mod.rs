mod matchlist;
mod overview;

pub use matchlist::*;
pub use overview::*;
