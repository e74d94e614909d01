// Application layer - Use case interactors

pub mod container;
pub mod split_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use split_interactor::{PlannedClip, SplitInteractor, SplitPlan};
