use crate::geometry::{letter_slot, KeyboardGeometry, ALPHABET_SIZE};

/// Substitution costs between letters, derived from key-centre distances.
///
/// Costs are precomputed into a flat `ALPHABET_SIZE * ALPHABET_SIZE` table so the
/// aligner's inner loop is a single indexed load.
#[derive(Debug, Clone)]
pub struct ProximityModel {
    positions: [Option<(f32, f32)>; ALPHABET_SIZE],
    cost_table: Vec<f64>,
    max_distance: f64,
}

/// Pure Euclidean distance between two key centres.
pub fn get_geo_dist(a: (f32, f32), b: (f32, f32)) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    (dx * dx + dy * dy).sqrt()
}

impl ProximityModel {
    pub fn new(geometry: &KeyboardGeometry) -> Self {
        let mut positions = [None; ALPHABET_SIZE];
        for key in &geometry.keys {
            if let Some(slot) = u8::try_from(key.letter).ok().and_then(letter_slot) {
                positions[slot] = Some((key.x, key.y));
            }
        }

        let mut max_distance = 0.0f64;
        for i in 0..ALPHABET_SIZE {
            for j in (i + 1)..ALPHABET_SIZE {
                if let (Some(p1), Some(p2)) = (positions[i], positions[j]) {
                    max_distance = max_distance.max(get_geo_dist(p1, p2));
                }
            }
        }

        let mut cost_table = vec![1.0; ALPHABET_SIZE * ALPHABET_SIZE];
        for i in 0..ALPHABET_SIZE {
            for j in 0..ALPHABET_SIZE {
                let idx = i * ALPHABET_SIZE + j;
                if i == j {
                    cost_table[idx] = 0.0;
                    continue;
                }
                if let (Some(p1), Some(p2)) = (positions[i], positions[j]) {
                    if max_distance > 0.0 {
                        cost_table[idx] = (get_geo_dist(p1, p2) / max_distance).min(1.0);
                    }
                }
            }
        }

        Self {
            positions,
            cost_table,
            max_distance,
        }
    }

    pub fn position(&self, letter: u8) -> Option<(f32, f32)> {
        letter_slot(letter).and_then(|slot| self.positions[slot])
    }

    /// True when the letter has a key on the layout and may take part in matching.
    #[inline(always)]
    pub fn contains(&self, letter: u8) -> bool {
        self.position(letter).is_some()
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Normalised substitution cost in `[0, 1]`.
    #[inline(always)]
    pub fn cost(&self, a: u8, b: u8) -> f64 {
        match (letter_slot(a), letter_slot(b)) {
            (Some(i), Some(j)) => self.cost_table[i * ALPHABET_SIZE + j],
            _ => 1.0,
        }
    }
}

impl Default for ProximityModel {
    fn default() -> Self {
        Self::new(&KeyboardGeometry::qwerty())
    }
}
