pub use utilities;

mod collector;
mod slice;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use collector::{KeyedCollector, Mapify};
pub use slice::{
    from_option_slice, from_option_slice_with_duplicates, from_slice, from_slice_with_duplicates,
    try_from_slice, try_from_slice_with_duplicates,
};
pub use utilities::func::{compose, or_sentinel};
