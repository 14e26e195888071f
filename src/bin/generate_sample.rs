//! Generate a synthetic `us_airfares_processed.csv` so the dashboard can run
//! without the real DoT export. Deterministic: same seed, same file.

use anyhow::{Context, Result};

const OUTPUT: &str = "us_airfares_processed.csv";
const SEED: u64 = 0x5EED_FA4E;

const YEARS: std::ops::RangeInclusive<i32> = 1996..=2023;
const CARRIERS: [&str; 8] = ["AA", "AS", "B6", "DL", "F9", "NK", "UA", "WN"];

/// (city label, lon, lat) — a spread of large US markets.
const CITIES: [(&str, f64, f64); 16] = [
    ("Atlanta GA", -84.39, 33.75),
    ("Boston MA", -71.06, 42.36),
    ("Chicago IL", -87.63, 41.88),
    ("Dallas TX", -96.80, 32.78),
    ("Denver CO", -104.99, 39.74),
    ("Detroit MI", -83.05, 42.33),
    ("Houston TX", -95.37, 29.76),
    ("Las Vegas NV", -115.14, 36.17),
    ("Los Angeles CA", -118.24, 34.05),
    ("Miami FL", -80.19, 25.76),
    ("Minneapolis MN", -93.27, 44.98),
    ("New York NY", -74.01, 40.71),
    ("Phoenix AZ", -112.07, 33.45),
    ("San Francisco CA", -122.42, 37.77),
    ("Seattle WA", -122.33, 47.61),
    ("Washington DC", -77.04, 38.91),
];

// ---------------------------------------------------------------------------
// Minimal deterministic PRNG (splitmix64)
// ---------------------------------------------------------------------------

struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [lo, hi).
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Great-circle distance in statute miles.
fn haversine_miles(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    const EARTH_RADIUS_MILES: f64 = 3958.8;
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * a.sqrt().atan2((1.0 - a).sqrt())
}

fn main() -> Result<()> {
    let mut rng = SplitMix64::new(SEED);
    let mut writer = csv::Writer::from_path(OUTPUT).with_context(|| format!("creating {OUTPUT}"))?;

    // pandas-style leading index column with an empty header.
    writer.write_record([
        "",
        "year",
        "quarter",
        "city1",
        "city2",
        "city1_lon",
        "city1_lat",
        "city2_lon",
        "city2_lat",
        "nonstop_miles",
        "fare",
        "passengers",
        "airline_largest",
    ])?;

    let mut index = 0usize;
    for (i, &(origin, o_lon, o_lat)) in CITIES.iter().enumerate() {
        for (j, &(dest, d_lon, d_lat)) in CITIES.iter().enumerate() {
            if i == j {
                continue;
            }
            let miles = haversine_miles(o_lon, o_lat, d_lon, d_lat);
            // Route-level market size, reused each quarter with noise.
            let base_passengers = rng.uniform(150.0, 4000.0);
            let dominant = CARRIERS[(rng.next_u64() % CARRIERS.len() as u64) as usize];

            for year in YEARS {
                // Keep the panel unbalanced like the real report: some
                // route-years are simply absent.
                if rng.next_f64() < 0.25 {
                    continue;
                }
                for quarter in 1u8..=4 {
                    let inflation = 1.0 + 0.018 * (year - 1996) as f64;
                    let fare = (55.0 + 0.115 * miles) * inflation * rng.uniform(0.8, 1.25);
                    let passengers = (base_passengers * rng.uniform(0.7, 1.3)).round();
                    let carrier = if rng.next_f64() < 0.8 {
                        dominant
                    } else {
                        CARRIERS[(rng.next_u64() % CARRIERS.len() as u64) as usize]
                    };

                    writer.write_record([
                        index.to_string(),
                        year.to_string(),
                        quarter.to_string(),
                        origin.to_string(),
                        dest.to_string(),
                        format!("{o_lon:.2}"),
                        format!("{o_lat:.2}"),
                        format!("{d_lon:.2}"),
                        format!("{d_lat:.2}"),
                        format!("{miles:.1}"),
                        format!("{fare:.2}"),
                        format!("{passengers:.1}"),
                        carrier.to_string(),
                    ])?;
                    index += 1;
                }
            }
        }
    }

    writer.flush()?;
    println!("wrote {index} records to {OUTPUT}");
    Ok(())
}
