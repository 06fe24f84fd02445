pub mod mock;
pub mod sandbox;
