pub mod storage;
pub mod style;

use chrono::{DateTime, Local, Utc};
use rand::{SeedableRng, rngs::StdRng};
use tracing::warn;

pub fn local_time(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%b %e, %Y at %H:%M")
        .to_string()
}

// "updated 5 minutes ago" style timestamps for document rows
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    if elapsed.num_seconds() < 60 {
        return String::from("just now");
    }

    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };

    match elapsed.num_minutes() {
        m if m < 60 => plural(m, "minute"),
        m if m < 60 * 24 => plural(m / 60, "hour"),
        m if m < 60 * 24 * 30 => plural(m / (60 * 24), "day"),
        _ => then.with_timezone(&Local).format("%b %e, %Y").to_string(),
    }
}

// browser crypto when it is there, the clock when it is not
pub fn seeded_rng() -> StdRng {
    let mut seed = [0u8; 32];

    match getrandom::getrandom(&mut seed) {
        Ok(()) => StdRng::from_seed(seed),
        Err(err) => {
            warn!("no entropy source, seeding from the clock: {err}");
            StdRng::seed_from_u64(Utc::now().timestamp_millis() as u64)
        }
    }
}
