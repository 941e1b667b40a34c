pub(crate) mod filter;
pub(crate) mod resize_kernel;
