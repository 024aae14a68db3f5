pub mod allocation;
pub mod calculation;
pub mod discount;
pub mod roster;
