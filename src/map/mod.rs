pub(crate) mod arena;
pub(crate) mod builder;
pub(crate) mod geometry;
pub(crate) mod table;
