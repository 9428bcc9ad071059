//! Writes a synthetic collisions CSV in the source-data header convention
//! so the dashboard can be exercised without the real city export.

const OUTPUT_PATH: &str = "sample_collisions.csv";
const ROWS: usize = 10_000;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const STREETS: [&str; 20] = [
    "BROADWAY",
    "ATLANTIC AVENUE",
    "FLATBUSH AVENUE",
    "QUEENS BOULEVARD",
    "GRAND CONCOURSE",
    "NORTHERN BOULEVARD",
    "LINDEN BOULEVARD",
    "OCEAN PARKWAY",
    "EASTERN PARKWAY",
    "FORDHAM ROAD",
    "CANAL STREET",
    "DELANCEY STREET",
    "2 AVENUE",
    "3 AVENUE",
    "5 AVENUE",
    "LEXINGTON AVENUE",
    "AMSTERDAM AVENUE",
    "ROOSEVELT AVENUE",
    "HYLAN BOULEVARD",
    "VICTORY BOULEVARD",
];

const BOROUGHS: [&str; 5] = ["BROOKLYN", "QUEENS", "MANHATTAN", "BRONX", "STATEN ISLAND"];

/// Small injury count, heavily skewed toward zero.
fn injury_count(rng: &mut SimpleRng, incidence: f64) -> u32 {
    if rng.next_f64() >= incidence {
        return 0;
    }
    1 + rng.below(3) as u32
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH).expect("Failed to create output file");
    writer
        .write_record([
            "CRASH_DATE",
            "CRASH_TIME",
            "BOROUGH",
            "LATITUDE",
            "LONGITUDE",
            "INJURED_PERSONS",
            "INJURED_PEDESTRIANS",
            "INJURED_CYCLISTS",
            "INJURED_MOTORISTS",
            "ON_STREET_NAME",
        ])
        .expect("Failed to write header");

    for _ in 0..ROWS {
        let date = format!(
            "{:02}/{:02}/2023",
            1 + rng.below(12),
            1 + rng.below(28),
        );
        let time = format!("{:02}:{:02}", rng.below(24), rng.below(60));
        let borough = BOROUGHS[rng.below(BOROUGHS.len() as u64) as usize];

        // Cluster coordinates around the city center; ~2% of rows lose
        // them, the way the real export does.
        let (latitude, longitude) = if rng.next_f64() < 0.02 {
            (String::new(), String::new())
        } else {
            (
                format!("{:.6}", rng.gauss(40.73, 0.07).clamp(40.50, 40.92)),
                format!("{:.6}", rng.gauss(-73.93, 0.09).clamp(-74.26, -73.68)),
            )
        };

        let pedestrians = injury_count(&mut rng, 0.10);
        let cyclists = injury_count(&mut rng, 0.06);
        let motorists = injury_count(&mut rng, 0.22);
        let persons = pedestrians + cyclists + motorists;
        let counts = [persons, pedestrians, cyclists, motorists].map(|n| n.to_string());

        let street = if rng.next_f64() < 0.12 {
            ""
        } else {
            STREETS[rng.below(STREETS.len() as u64) as usize]
        };

        writer
            .write_record([
                date.as_str(),
                time.as_str(),
                borough,
                latitude.as_str(),
                longitude.as_str(),
                counts[0].as_str(),
                counts[1].as_str(),
                counts[2].as_str(),
                counts[3].as_str(),
                street,
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {ROWS} collision rows to {OUTPUT_PATH}");
}
