mod confirm;
mod food;
mod payment;
mod seats;
mod showtime;

pub use confirm::ConfirmStep;
pub use food::FoodStep;
pub use payment::PaymentStep;
pub use seats::SeatsStep;
pub use showtime::ShowtimeStep;
