//! The out-of-range equinox warning reaches an installed subscriber.

use std::sync::{Arc, Mutex};

use almanac_search::{Season, approximate_equinox, mean_equinox};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Targets of WARN events seen while installed.
#[derive(Clone, Default)]
struct WarnTargets(Arc<Mutex<Vec<String>>>);

impl<S: Subscriber> Layer<S> for WarnTargets {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == Level::WARN {
            self.0.lock().unwrap().push(meta.target().to_string());
        }
    }
}

fn warnings_during(f: impl FnOnce()) -> Vec<String> {
    let targets = WarnTargets::default();
    let subscriber = tracing_subscriber::registry().with(targets.clone());
    tracing::subscriber::with_default(subscriber, f);
    let seen = targets.0.lock().unwrap().clone();
    seen
}

#[test]
fn warns_outside_validated_years() {
    let seen = warnings_during(|| {
        mean_equinox(4000, Season::Spring);
        mean_equinox(-1500, Season::Winter);
    });
    assert_eq!(seen, ["almanac_search::equinox", "almanac_search::equinox"]);
}

#[test]
fn silent_inside_validated_years() {
    let seen = warnings_during(|| {
        mean_equinox(-1000, Season::Spring);
        approximate_equinox(1962, Season::Summer);
        mean_equinox(3000, Season::Autumn);
    });
    assert!(seen.is_empty(), "{seen:?}");
}
