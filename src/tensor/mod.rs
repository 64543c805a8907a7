pub mod array_like;


pub use array_like::ArrayLike;
