/// Band-pass transmission: two logistic edges times a peak transmission.
fn bandpass(wl: f64, cut_on: f64, cut_off: f64, width: f64, peak: f64) -> f64 {
    let rise = 1.0 / (1.0 + (-(wl - cut_on) / width).exp());
    let fall = 1.0 / (1.0 + ((wl - cut_off) / width).exp());
    peak * rise * fall
}

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

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Format like a digitizer running under a comma-decimal locale.
fn comma_decimal(v: f64, decimals: usize) -> String {
    format!("{v:.decimals$}").replace('.', ",")
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    // Irregular clicks along the curve, 380 → ~780 nm.
    let mut points: Vec<(f64, f64)> = Vec::new();
    let mut wl = 380.0;
    while wl < 780.0 {
        let t = bandpass(wl, 480.0, 620.0, 12.0, 0.88) + (rng.next_f64() - 0.5) * 0.01;
        points.push((wl, t));
        wl += 2.0 + rng.next_f64() * 9.0;
    }

    let output_path = "sample_digitized.csv";
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(output_path)?;

    for (i, &(wl, t)) in points.iter().enumerate() {
        if i % 2 == 0 {
            writer.write_record([comma_decimal(wl, 4), comma_decimal(t, 5)])?;
        } else {
            writer.write_record([format!("{wl:.4}"), format!("{t:.5}")])?;
        }
        // A stray annotation the digitizer sometimes leaves behind.
        if i == points.len() / 2 {
            writer.write_record(["Dataset", "1"])?;
        }
    }
    writer.flush()?;

    println!("Wrote {} digitized points to {output_path}", points.len());
    Ok(())
}
