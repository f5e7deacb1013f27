use std::sync::Arc;

use rocket::{config::Config as RocketCfg, Rocket, Route};

use rotaplan_core::gateways::geocode::GeoCodingGateway;

pub mod api;
mod guards;


pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let geo_gw = guards::GeoCoding(geocoding);
    let version = guards::Version(version);

    let mut instance = r.manage(geo_gw).manage(version);
    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    enable_cors: bool,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        version,
    };
    let instance = rocket_instance(options, geocoding);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
