//! Service layer: serialized access to the pure domain core.

pub mod table;
