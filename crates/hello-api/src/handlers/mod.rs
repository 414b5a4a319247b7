pub mod greeting;
pub mod health;
