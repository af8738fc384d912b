use helpers::general::uniform_in_range;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// (km/h) Lower (inclusive) and upper (exclusive) bound of the randomly drawn competitor speed
pub const SPEED_MIN: f64 = 5.0;
pub const SPEED_MAX: f64 = 15.0;

/// * `id` - Competitor number, contiguous within a race and starting at 1
/// * `speed` - (km/h) Constant speed, i.e. distance covered per tick
/// * `distance_covered` - (km) Distance covered so far, never exceeds the total race distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: u32,
    #[serde(rename = "velocidad")]
    pub speed: f64,
    #[serde(rename = "distanciaRecorrida")]
    pub distance_covered: f64,
}

impl Competitor {
    pub fn new<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Competitor {
        Competitor {
            id,
            speed: uniform_in_range(rng, SPEED_MIN, SPEED_MAX),
            distance_covered: 0.0,
        }
    }

    /// create_field returns no_competitors fresh competitors numbered 1 to no_competitors.
    pub fn create_field<R: Rng + ?Sized>(no_competitors: u32, rng: &mut R) -> Vec<Competitor> {
        (1..=no_competitors).map(|id| Competitor::new(id, rng)).collect()
    }

    /// The method advances the competitor by one tick and returns true if it reached the total
    /// distance. In that case the covered distance is clamped to the total distance.
    pub fn advance(&mut self, total_distance: f64) -> bool {
        self.distance_covered += self.speed;

        if self.distance_covered >= total_distance {
            self.distance_covered = total_distance;
            return true;
        }
        false
    }

    /// label returns the human-readable tag used in the race history, e.g. "Corredor 3".
    pub fn label(&self) -> String {
        format!("Corredor {}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_create_field_ids_and_speeds() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = Competitor::create_field(25, &mut rng);

        assert_eq!(field.len(), 25);
        for (i, competitor) in field.iter().enumerate() {
            assert_eq!(competitor.id, i as u32 + 1);
            assert!((SPEED_MIN..SPEED_MAX).contains(&competitor.speed));
            assert_ulps_eq!(competitor.distance_covered, 0.0);
        }
    }

    #[test]
    fn test_advance_below_target() {
        let mut competitor = Competitor {
            id: 1,
            speed: 6.5,
            distance_covered: 0.0,
        };
        assert!(!competitor.advance(20.0));
        assert!(!competitor.advance(20.0));
        assert_ulps_eq!(competitor.distance_covered, 13.0);
    }

    #[test]
    fn test_advance_is_clamped() {
        let mut competitor = Competitor {
            id: 2,
            speed: 14.0,
            distance_covered: 0.0,
        };
        assert!(competitor.advance(10.0));
        assert_ulps_eq!(competitor.distance_covered, 10.0);
    }

    #[test]
    fn test_label() {
        let competitor = Competitor {
            id: 12,
            speed: 5.0,
            distance_covered: 0.0,
        };
        assert_eq!(competitor.label(), "Corredor 12");
    }
}
