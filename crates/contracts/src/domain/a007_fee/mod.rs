pub mod aggregate;
pub mod seed;
pub mod summary;

pub use aggregate::{Fee, FeeForm, FeeStatus, PaymentForm, PaymentMethod, Reminder};
pub use summary::ACADEMY_CURRENCY;
