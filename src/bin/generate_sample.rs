//! Writes a deterministic sample readings CSV for manual testing:
//! `cargo run --bin generate_sample`

use std::f64::consts::PI;

const SECTIONS: [&str; 8] = [
    "Açougue",
    "Frios",
    "Peixaria",
    "Hortifrúti",
    "Padaria",
    "Frente de Loja",
    "Docas Secas",
    "Doca Fria",
];

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

    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Integer gram deviation from the reference weight: mostly spot-on, some in
/// the tolerance band, a few clearly out of calibration.
fn sample_deviation(rng: &mut SimpleRng) -> i64 {
    let sign = if rng.next_f64() < 0.5 { -1 } else { 1 };
    let roll = rng.next_f64();
    if roll < 0.55 {
        0
    } else if roll < 0.85 {
        sign * rng.range(1, 5)
    } else {
        sign * (6 + rng.gauss(8.0, 6.0).abs().round() as i64)
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "sample_readings.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Balança", "Setor", "Peso", "Peso Máximo"])
        .expect("Failed to write header");

    let mut scale_id: i64 = 100;
    let mut rows = 0usize;

    for section in SECTIONS {
        let n_scales = rng.range(4, 8);
        for _ in 0..n_scales {
            let (max_capacity, reference) = if rng.next_f64() < 0.5 {
                (15000_i64, 10000_i64)
            } else {
                (35000_i64, 20000_i64)
            };
            let weight = reference + sample_deviation(&mut rng);

            writer
                .write_record([
                    scale_id.to_string(),
                    section.to_string(),
                    weight.to_string(),
                    max_capacity.to_string(),
                ])
                .expect("Failed to write row");

            scale_id += 1;
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} readings to {output_path}");
}
