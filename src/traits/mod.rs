mod observer;
pub use observer::Observer;
