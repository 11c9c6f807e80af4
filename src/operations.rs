//! Transformations of machines. Every operation leaves its receiver untouched and
//! produces a new machine.

mod canonic;

mod closure;
pub use closure::EpsilonClosures;

mod reachable;

mod subset;
pub use subset::subset_construction;
