pub mod completion;
pub mod upstream;
