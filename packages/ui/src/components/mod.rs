//! Form primitives shared by the landing page sections and modals.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Textarea};
