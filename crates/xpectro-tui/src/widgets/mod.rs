//! Custom widget components

mod dashboard;
mod detection;
mod dock;
mod domains;
mod header;
mod login;
pub mod modal_overlay;
mod overlays;
mod pricing;
mod restricted;
mod status_bar;

pub use dashboard::DashboardView;
pub use detection::DetectionView;
pub use dock::Dock;
pub use domains::{DomainsFocus, DomainsView};
pub use header::MainHeader;
pub use login::LoginView;
pub use overlays::{ConfirmQuitDialog, MobileMenu, ProfilePanel};
pub use pricing::PricingView;
pub use restricted::RestrictedPlaceholder;
pub use status_bar::{hints_for, StatusBar};

/// Caret appended to a field being edited
pub(crate) const CARET: &str = "▏";
