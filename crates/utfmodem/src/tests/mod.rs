#[cfg(feature = "collect")]
mod collect;
mod errors;
