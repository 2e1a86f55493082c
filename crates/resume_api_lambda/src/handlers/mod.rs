pub mod contact;
pub mod counter;
