pub mod pii;
pub mod money;

pub use money::Rupees;
pub use pii::Masked;
