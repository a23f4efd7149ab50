pub mod dashboard;
pub mod demo;
pub mod health;
pub mod sync;
