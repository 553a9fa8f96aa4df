pub mod app;
pub mod i18n;
pub mod logging;
pub mod pages;
pub mod router;
pub mod session;
pub mod storage;

pub use app::App;
pub use session::{Credentials, LoginHandler, LoginRequest};
pub use storage::LocalFlagStore;
