mod group;
mod not_found;
mod onboarding;
mod tabs;

pub use group::{AddStudentPage, GroupDetailsPage, ProfileUpdatePage};
pub use not_found::NotFoundPage;
pub use onboarding::{LanguageSelectPage, LoginPage};
pub use tabs::{MainPage, ProfilePage, TabsPage, WalletPage};
