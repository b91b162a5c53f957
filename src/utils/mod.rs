mod iter;
pub use iter::Iter;

mod validate;
