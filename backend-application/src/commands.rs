pub mod clock_in_commands;
pub mod item_commands;
