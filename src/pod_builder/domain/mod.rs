pub mod checkout;
pub mod pod_spec_document;
pub mod podfile_entry;
pub mod podfile_item;
pub mod podfile_items;
pub mod prebuild_config;
pub mod specification;

pub use checkout::{CheckoutOptions, CheckoutOverride};
pub use pod_spec_document::{PodSpecDocument, SourceDocument};
pub use podfile_entry::{parse_marker, GIT_HARD_CHECKOUT_PREFIX};
pub use podfile_item::PodfileItem;
pub use podfile_items::PodfileItems;
pub use prebuild_config::PrebuildConfig;
pub use specification::{SpecAttributes, SpecCatalog, SpecNode, Specification};
