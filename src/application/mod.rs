pub mod paginate;

pub use paginate::paginate;
