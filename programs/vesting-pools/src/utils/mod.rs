pub mod clock;
pub mod pda;
pub mod unlock;
