//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod routes;
pub(crate) mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use serve::ServeArgs;
