//! End-to-end scenarios for the EEML model and XML codec.
//!
//! Run them with:
//! ```text
//! cargo test -p eeml-integration
//! ```

use std::sync::Once;

use chrono::{TimeZone, Utc};
use eeml_model::{Data, Domain, Environment, Location, Status, Unit};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// The environment behind the "complete" EEML example document: every
/// environment field set, a physical location, and three readings.
#[must_use]
pub fn complete_environment() -> Environment {
    init_tracing();

    let mut env = Environment::new();
    env.set_title("A Room Somewhere");
    env.set_feed("http://www.pachube.com/feeds/1.xml");
    env.set_status(Status::Frozen);
    env.set_description("This is a room somewhere");
    env.set_icon("http://www.roomsomewhere/icon.png");
    env.set_website("http://www.roomsomewhere/");
    env.set_email("myemail@roomsomewhere");
    if let Some(updated) = Utc.with_ymd_and_hms(2007, 5, 4, 18, 13, 51).single() {
        env.set_updated_at(updated);
    }
    env.set_creator("http://www.haque.co.uk");
    env.set_id(1);
    env.set_location(
        Location::new(Domain::Physical)
            .with_exposure("indoor")
            .with_disposition("fixed")
            .with_name("My Room")
            .with_lat(32.4)
            .with_lon(22.7)
            .with_ele(0.2),
    );

    let mut temperature = Data::new(36.2);
    temperature.add_tag("temperature");
    temperature.set_max_value(Some(48.0));
    temperature.set_min_value(Some(23.0));
    temperature.set_unit(unit("Celsius", Some("C"), "derivedSI"));
    env.push(temperature);

    let mut blush = Data::new(84.0);
    blush.add_tag("blush");
    blush.add_tag("redness");
    blush.add_tag("embarrassment");
    blush.set_max_value(Some(100.0));
    blush.set_min_value(Some(0.0));
    blush.set_unit(unit("blushesPerHour", None, "contextDependentUnits"));
    env.push(blush);

    let mut length = Data::new(12.3);
    length.add_tag("length");
    length.add_tag("distance");
    length.add_tag("extension");
    length.set_min_value(Some(0.0));
    length.set_unit(unit("meter", Some("m"), "basicSI"));
    env.push(length);

    env
}

fn unit(name: &str, symbol: Option<&str>, unit_type: &str) -> Option<Unit> {
    let unit = Unit::new(name).ok()?.with_unit_type(unit_type);
    Some(match symbol {
        Some(symbol) => unit.with_symbol(symbol),
        None => unit,
    })
}

mod test_document;
mod test_model;
mod test_roundtrip;
