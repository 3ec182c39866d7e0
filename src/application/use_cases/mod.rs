/// Use cases module containing application business logic orchestration
mod checkout_pod;
mod load_items;
mod plan_prebuild;
mod restore_all;

pub use checkout_pod::CheckoutPodUseCase;
pub use load_items::load_items;
pub use plan_prebuild::PlanPrebuildUseCase;
pub use restore_all::RestoreAllUseCase;
