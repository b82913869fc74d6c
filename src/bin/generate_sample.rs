//! Regenerates `penguins.csv`: a deterministic measurement sample with the
//! fixed schema the dashboard loads at startup.

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Per-species measurement distributions: (mean, std dev).
struct SpeciesSpec {
    name: &'static str,
    islands: &'static [&'static str],
    count: usize,
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    flipper_length: (f64, f64),
    body_mass: (f64, f64),
}

const SPECS: [SpeciesSpec; 3] = [
    SpeciesSpec {
        name: "Adelie",
        islands: &["Torgersen", "Biscoe", "Dream"],
        count: 152,
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3700.0, 460.0),
    },
    SpeciesSpec {
        name: "Gentoo",
        islands: &["Biscoe"],
        count: 124,
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        flipper_length: (217.0, 6.5),
        body_mass: (5080.0, 500.0),
    },
    SpeciesSpec {
        name: "Chinstrap",
        islands: &["Dream"],
        count: 68,
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        flipper_length: (196.0, 7.1),
        body_mass: (3730.0, 385.0),
    },
];

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "penguins.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "species",
            "island",
            "bill_length_mm",
            "bill_depth_mm",
            "flipper_length_mm",
            "body_mass_g",
            "sex",
            "year",
        ])
        .expect("Failed to write header");

    let mut total = 0usize;
    for spec in &SPECS {
        for _ in 0..spec.count {
            let island = spec.islands[(rng.next_f64() * spec.islands.len() as f64) as usize];
            let year = 2007 + (rng.next_f64() * 3.0) as i64;

            let bill_length = rng.gauss(spec.bill_length.0, spec.bill_length.1);
            let bill_depth = rng.gauss(spec.bill_depth.0, spec.bill_depth.1);
            let flipper_length = rng.gauss(spec.flipper_length.0, spec.flipper_length.1);
            // Masses come in 25 g increments, like field scales report them.
            let body_mass = (rng.gauss(spec.body_mass.0, spec.body_mass.1) / 25.0).round() * 25.0;

            let sex = if rng.next_f64() < 0.5 { "male" } else { "female" };

            // A small fraction of rows has no measurements at all, a few
            // more are missing only the sex annotation.
            let missing = rng.next_f64();
            let (bill_length, bill_depth, flipper_length, body_mass, sex) = if missing < 0.02 {
                ("NA".to_string(), "NA".to_string(), "NA".to_string(), "NA".to_string(), "NA")
            } else if missing < 0.05 {
                (
                    format!("{bill_length:.1}"),
                    format!("{bill_depth:.1}"),
                    format!("{flipper_length:.0}"),
                    format!("{body_mass:.0}"),
                    "NA",
                )
            } else {
                (
                    format!("{bill_length:.1}"),
                    format!("{bill_depth:.1}"),
                    format!("{flipper_length:.0}"),
                    format!("{body_mass:.0}"),
                    sex,
                )
            };

            let year = year.to_string();
            writer
                .write_record([
                    spec.name,
                    island,
                    bill_length.as_str(),
                    bill_depth.as_str(),
                    flipper_length.as_str(),
                    body_mass.as_str(),
                    sex,
                    year.as_str(),
                ])
                .expect("Failed to write record");
            total += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {total} penguin records to {output_path}");
}
