mod collection;
mod session;
mod storage;

pub use collection::Collection;
pub use session::Session;
pub use session::SessionManager;
pub use storage::SessionStore;
pub use storage::TOKEN_KEY;
pub use storage::USER_KEY;
