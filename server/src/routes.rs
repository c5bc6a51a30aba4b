use time::OffsetDateTime;
use warp::filters::fs::File;
use warp::filters::BoxedFilter;
use warp::reply::{json, Reply};
use warp::Filter;

use crate::environment::Environment;

mod response;

use response::SuccessResponse;

type Route = BoxedFilter<(Box<dyn Reply>,)>;

/// `GET /` serves the primary document.
pub fn make_index_route(environment: Environment) -> Route {
    warp::get()
        .and(warp::path::end())
        .and(warp::fs::file(environment.config.index_document()))
        .map(|file: File| Box::new(file) as Box<dyn Reply>)
        .boxed()
}

/// `GET /enhanced` serves the alternate build artifact.
pub fn make_enhanced_route(environment: Environment) -> Route {
    warp::get()
        .and(warp::path("enhanced"))
        .and(warp::path::end())
        .and(warp::fs::file(environment.config.enhanced_document()))
        .map(|file: File| Box::new(file) as Box<dyn Reply>)
        .boxed()
}

/// `GET /health` reports liveness along with the environment name and the
/// build version.
pub fn make_health_route(environment: Environment) -> Route {
    warp::get()
        .and(warp::path("health"))
        .and(warp::path::end())
        .map(move || {
            Box::new(json(&SuccessResponse::Health {
                status: "healthy",
                timestamp: OffsetDateTime::now_utc(),
                environment: &environment.config.environment,
                version: info::VERSION,
            })) as Box<dyn Reply>
        })
        .boxed()
}

/// Everything else falls through to the assets directory, the way the
/// interface build expects its scripts, styles and data to be reachable.
pub fn make_assets_route(environment: Environment) -> Route {
    warp::get()
        .and(warp::fs::dir(environment.config.assets_dir().to_owned()))
        .map(|file: File| Box::new(file) as Box<dyn Reply>)
        .boxed()
}
