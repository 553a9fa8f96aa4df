//! Teachers App core: navigation guard, route table, localization and
//! packaging configuration

pub mod config;
pub mod error;
pub mod flags;
pub mod guard;
pub mod i18n;
pub mod page;
pub mod routes;

pub use self::config::AppConfig;
pub use error::{CoreError, CoreResult};
pub use flags::{FlagKeys, FlagStore, MemoryFlagStore, PersistedFlags, SessionPhase};
pub use guard::{Decision, Navigation, NavigationGuard, NavigationRequest, decide};
pub use i18n::{Catalog, Locale};
pub use page::Page;
pub use routes::{RouteMatch, RouteRecord, RouteTable, RouteTarget, View};
