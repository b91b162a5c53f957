#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]

extern crate alloc;

mod node;
pub use node::{Node, NodeId};

mod tree;
pub use tree::Tree;

mod dsw;
pub use dsw::{COMPRESS_ROTATION, VINE_ROTATION};

mod error;
pub use error::TreeError;

mod traits;
pub use traits::Observer;

mod utils;
pub use utils::Iter;

pub mod layout;
pub use layout::LayoutConfig;
