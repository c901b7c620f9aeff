//! Query layer - selects what the serializers see

mod feed;
mod routes;

pub use feed::FeedQuery;
pub use routes::{collect_routes, RouteQuery, SiteRoute};
