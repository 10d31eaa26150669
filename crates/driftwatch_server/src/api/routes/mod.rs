pub mod drift;
pub mod health;
