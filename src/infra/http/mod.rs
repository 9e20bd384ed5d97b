mod admin;
mod middleware;
mod public;

pub use admin::{AdminState, SESSION_COOKIE, build_admin_router};
pub use public::{HttpState, build_router};

const DATASTAR_REQUEST_HEADER: &str = "datastar-request";
