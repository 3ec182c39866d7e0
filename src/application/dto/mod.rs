/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod checkout;
mod plan;
mod restore;
mod settings;

pub use checkout::{CheckoutRequest, CheckoutResponse};
pub use plan::{PlanRequest, PlanResponse};
pub use restore::RestoreRequest;
pub use settings::{PrebuildSettings, DEFAULT_BUILD_COMMAND};
