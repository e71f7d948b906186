pub mod func;
pub mod iterable;
