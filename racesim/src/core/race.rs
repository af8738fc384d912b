use crate::core::competitor::Competitor;
use crate::post::race_result::WinnerInfo;
use crate::pre::race_pars::{RacePars, RaceParsInput};
use helpers::general::{fmt_decimals, round_to_decimals};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of decimals used for distances in snapshots and winner information
pub const DISTANCE_DECIMALS: u32 = 2;

/// Race ids are drawn from this (inclusive) range
pub const RACE_ID_MIN: u32 = 10000;
pub const RACE_ID_MAX: u32 = 99999;

/// * `tick` - Tick the snapshot was taken at (starting at 1)
/// * `state` - Rounded distance covered per competitor label, in competitor order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "hora")]
    pub tick: u32,
    #[serde(rename = "estado")]
    pub state: Map<String, Value>,
}

#[cfg(test)]
impl Snapshot {
    /// distance_of returns the recorded distance of the competitor with the given label.
    pub fn distance_of(&self, label: &str) -> Option<f64> {
        self.state.get(label).and_then(Value::as_f64)
    }
}

/// Race is the persisted record of a single race. Once finished is set, winner is available and
/// simulate_tick does not modify the race anymore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: u32,
    #[serde(rename = "distanciaTotal")]
    pub total_distance: f64,
    #[serde(rename = "competidores")]
    pub competitors: Vec<Competitor>,
    #[serde(rename = "historial")]
    pub history: Vec<Snapshot>,
    #[serde(rename = "finalizada")]
    pub finished: bool,
    #[serde(rename = "ganador")]
    pub winner: Option<WinnerInfo>,
}

/// draw_race_id returns a random race id within [RACE_ID_MIN, RACE_ID_MAX].
pub fn draw_race_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(RACE_ID_MIN..=RACE_ID_MAX)
}

impl Race {
    pub fn new<R: Rng + ?Sized>(id: u32, race_pars: &RacePars, rng: &mut R) -> Race {
        Race {
            id,
            total_distance: race_pars.total_distance,
            competitors: Competitor::create_field(race_pars.no_competitors, rng),
            history: vec![],
            finished: false,
            winner: None,
        }
    }

    /// The method puts the race back into its created state. The competitors are regenerated if
    /// a number of competitors is given, otherwise the existing ones keep their speeds but start
    /// from zero again. The total distance is replaced if given.
    pub fn reset<R: Rng + ?Sized>(&mut self, input: &RaceParsInput, rng: &mut R) {
        match input.no_competitors_given() {
            Some(no_competitors) => {
                self.competitors = Competitor::create_field(no_competitors, rng);
            }
            None => {
                for competitor in self.competitors.iter_mut() {
                    competitor.distance_covered = 0.0;
                }
            }
        }

        if let Some(total_distance) = input.distance_given() {
            self.total_distance = total_distance;
        }

        self.history.clear();
        self.finished = false;
        self.winner = None;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// can_finish returns false if no competitor will ever reach the total distance, e.g. because
    /// the race has no competitors.
    pub fn can_finish(&self) -> bool {
        !self.competitors.is_empty()
            && (self.total_distance <= 0.0 || self.competitors.iter().any(|c| c.speed > 0.0))
    }

    /// cur_tick returns the number of ticks simulated so far.
    pub fn cur_tick(&self) -> u32 {
        self.history.len() as u32
    }

    // ---------------------------------------------------------------------------------------------
    // MAIN METHOD ---------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// The method simulates one tick. Execution order:
    /// 1. Increment the tick counter.
    /// 2. Advance the competitors in id order until one of them reaches the total distance. That
    /// competitor wins (lowest id in case of a tie) and the remaining competitors are not advanced
    /// in this tick.
    /// 3. Append a snapshot of all competitors to the history.
    ///
    /// Finished races are left untouched.
    pub fn simulate_tick(&mut self) {
        if self.finished {
            return;
        }

        // increment discretization variable
        let tick = self.cur_tick() + 1;

        // update race progress
        let total_distance = self.total_distance;
        let mut winner_idx: Option<usize> = None;

        for (idx, competitor) in self.competitors.iter_mut().enumerate() {
            if winner_idx.is_none() && competitor.advance(total_distance) {
                winner_idx = Some(idx);
            }
        }

        // handle finish
        if let Some(idx) = winner_idx {
            let competitor = &self.competitors[idx];
            self.winner = Some(WinnerInfo {
                id: competitor.id,
                distance_covered: fmt_decimals(competitor.distance_covered, DISTANCE_DECIMALS),
                total_ticks: tick,
            });
            self.finished = true;
        }

        let snapshot = self.take_snapshot(tick);
        self.history.push(snapshot);
    }

    /// take_snapshot records the rounded distance covered by every competitor.
    pub fn take_snapshot(&self, tick: u32) -> Snapshot {
        let state = self
            .competitors
            .iter()
            .map(|competitor| {
                (
                    competitor.label(),
                    Value::from(round_to_decimals(
                        competitor.distance_covered,
                        DISTANCE_DECIMALS,
                    )),
                )
            })
            .collect();

        Snapshot { tick, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::competitor::{SPEED_MAX, SPEED_MIN};
    use approx::assert_ulps_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn race_with_speeds(total_distance: f64, speeds: &[f64]) -> Race {
        Race {
            id: 12345,
            total_distance,
            competitors: speeds
                .iter()
                .enumerate()
                .map(|(i, &speed)| Competitor {
                    id: i as u32 + 1,
                    speed,
                    distance_covered: 0.0,
                })
                .collect(),
            history: vec![],
            finished: false,
            winner: None,
        }
    }

    fn run_to_finish(race: &mut Race) {
        while !race.is_finished() {
            race.simulate_tick();
        }
    }

    #[test]
    fn test_new_race() {
        let mut rng = StdRng::seed_from_u64(1);
        let pars = RacePars {
            no_competitors: 4,
            total_distance: 100.0,
        };
        let race = Race::new(54321, &pars, &mut rng);

        assert_eq!(race.id, 54321);
        assert_eq!(
            race.competitors.iter().map(|c| c.id).collect::<Vec<u32>>(),
            vec![1, 2, 3, 4]
        );
        assert!(race.history.is_empty());
        assert!(!race.finished);
        assert!(race.winner.is_none());
    }

    #[test]
    fn test_draw_race_id_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let id = draw_race_id(&mut rng);
            assert!((RACE_ID_MIN..=RACE_ID_MAX).contains(&id));
        }
    }

    #[test]
    fn test_simulate_tick_records_snapshot() {
        let mut race = race_with_speeds(100.0, &[5.5, 7.125]);
        race.simulate_tick();

        assert_eq!(race.history.len(), 1);
        assert_eq!(race.history[0].tick, 1);
        assert_eq!(race.history[0].distance_of("Corredor 1"), Some(5.5));
        assert_eq!(race.history[0].distance_of("Corredor 2"), Some(7.13));
        assert!(!race.is_finished());
    }

    #[test]
    fn test_winner_is_clamped() {
        let mut race = race_with_speeds(10.0, &[6.0, 7.0]);
        run_to_finish(&mut race);

        // tick 1: 6, 7 / tick 2: 12 -> competitor 1 wins, competitor 2 is not advanced
        let winner = race.winner.clone().unwrap();
        assert_eq!(winner.id, 1);
        assert_eq!(winner.distance_covered, "10.00");
        assert_eq!(winner.total_ticks, 2);
        assert_ulps_eq!(race.competitors[0].distance_covered, 10.0);
        assert_ulps_eq!(race.competitors[1].distance_covered, 7.0);

        let last = race.history.last().unwrap();
        assert_eq!(last.distance_of("Corredor 1"), Some(10.0));
        assert_eq!(last.distance_of("Corredor 2"), Some(7.0));
    }

    #[test]
    fn test_winner_matches_last_snapshot() {
        let mut race = race_with_speeds(10.125, &[11.0]);
        race.simulate_tick();

        let winner = race.winner.clone().unwrap();
        assert_eq!(winner.distance_covered, "10.13");
        assert_eq!(race.history[0].distance_of("Corredor 1"), Some(10.13));
    }

    #[test]
    fn test_tie_goes_to_lowest_id() {
        let mut race = race_with_speeds(10.0, &[12.0, 14.0, 11.0]);
        race.simulate_tick();

        let winner = race.winner.clone().unwrap();
        assert_eq!(winner.id, 1);
        assert_eq!(winner.total_ticks, 1);
        assert_ulps_eq!(race.competitors[1].distance_covered, 0.0);
        assert_ulps_eq!(race.competitors[2].distance_covered, 0.0);
    }

    #[test]
    fn test_history_is_contiguous() {
        let mut rng = StdRng::seed_from_u64(11);
        let pars = RacePars {
            no_competitors: 5,
            total_distance: 250.0,
        };
        let mut race = Race::new(10000, &pars, &mut rng);
        run_to_finish(&mut race);

        let winner = race.winner.clone().unwrap();
        assert_eq!(race.history.len() as u32, winner.total_ticks);
        for (i, snapshot) in race.history.iter().enumerate() {
            assert_eq!(snapshot.tick, i as u32 + 1);
            assert_eq!(snapshot.state.len(), 5);
        }
        for competitor in race.competitors.iter() {
            assert!(competitor.distance_covered <= race.total_distance);
        }
        assert_eq!(winner.distance_covered, "250.00");
    }

    #[test]
    fn test_finished_race_is_not_modified() {
        let mut race = race_with_speeds(10.0, &[6.0, 7.0]);
        run_to_finish(&mut race);
        let finished = race.clone();

        race.simulate_tick();
        assert_eq!(race, finished);
    }

    #[test]
    fn test_reset_with_competitors() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut race = race_with_speeds(10.0, &[6.0, 7.0]);
        run_to_finish(&mut race);

        let input = RaceParsInput {
            no_competitors: Some(3),
            distance: Some(30.0),
        };
        race.reset(&input, &mut rng);

        assert_eq!(race.competitors.len(), 3);
        assert_eq!(
            race.competitors.iter().map(|c| c.id).collect::<Vec<u32>>(),
            vec![1, 2, 3]
        );
        assert!(race
            .competitors
            .iter()
            .all(|c| (SPEED_MIN..SPEED_MAX).contains(&c.speed)));
        // the speeds are drawn anew instead of keeping the old field
        assert!(race.competitors[..2]
            .iter()
            .zip([6.0, 7.0].iter())
            .all(|(c, &old)| c.speed != old));
        assert_ulps_eq!(race.total_distance, 30.0);
        assert!(race.history.is_empty());
        assert!(!race.finished);
        assert!(race.winner.is_none());
        assert!(race.competitors.iter().all(|c| c.distance_covered == 0.0));
    }

    #[test]
    fn test_reset_without_competitors_keeps_speeds() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut race = race_with_speeds(10.0, &[6.0, 7.0]);
        run_to_finish(&mut race);

        race.reset(&RaceParsInput::default(), &mut rng);

        assert_eq!(race.competitors.len(), 2);
        assert_ulps_eq!(race.competitors[0].speed, 6.0);
        assert_ulps_eq!(race.competitors[0].distance_covered, 0.0);
        assert_ulps_eq!(race.total_distance, 10.0);
        assert!(race.history.is_empty());
    }

    #[test]
    fn test_can_finish() {
        assert!(race_with_speeds(10.0, &[6.0]).can_finish());
        assert!(!race_with_speeds(10.0, &[]).can_finish());
        assert!(!race_with_speeds(10.0, &[0.0, 0.0]).can_finish());
        assert!(!race_with_speeds(-1.0, &[]).can_finish());
    }

    #[test]
    fn test_serialized_keys() {
        let race = race_with_speeds(10.0, &[6.0]);
        let json = serde_json::to_value(&race).unwrap();

        assert_eq!(json["distanciaTotal"], 10.0);
        assert_eq!(json["competidores"][0]["velocidad"], 6.0);
        assert_eq!(json["competidores"][0]["distanciaRecorrida"], 0.0);
        assert_eq!(json["historial"], serde_json::json!([]));
        assert_eq!(json["finalizada"], false);
        assert!(json["ganador"].is_null());
    }
}
