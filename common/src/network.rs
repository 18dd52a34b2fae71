pub mod bits;
pub mod mask;
