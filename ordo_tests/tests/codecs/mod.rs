pub mod compounds;
pub mod helpers;
pub mod scalars;
pub mod structs;
pub mod texts;
pub mod varuints;
