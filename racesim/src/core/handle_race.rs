use crate::core::race::{draw_race_id, Race};
use crate::error::RaceError;
use crate::post::race_result::RaceResult;
use crate::pre::race_pars::{check_start_pars, RaceParsInput};
use crate::pre::service_opts::PersistMode;
use crate::store::RaceStore;
use anyhow::anyhow;
use rand::Rng;
use tracing::{debug, info, warn};

/// Maximum number of random ids drawn before race creation is given up
pub const MAX_ID_DRAWS: u32 = 16;

/// start_race creates a race with randomly drawn competitor speeds on the basis of the inserted
/// parameters, stores it, and returns its id.
pub fn start_race<R: Rng + ?Sized>(
    store: &mut dyn RaceStore,
    input: &RaceParsInput,
    rng: &mut R,
) -> Result<u32, RaceError> {
    let race_pars = check_start_pars(input)?;

    // draw an id that is not taken yet
    let mut id = draw_race_id(rng);
    let mut no_draws = 1;

    while store.contains(id)? {
        if no_draws >= MAX_ID_DRAWS {
            return Err(RaceError::CreationConflict(id));
        }
        warn!("Race id {} is already taken, drawing a new one", id);
        id = draw_race_id(rng);
        no_draws += 1;
    }

    let race = Race::new(id, &race_pars, rng);
    store.create(&race)?;

    info!(
        "Created race {} with {} competitors over {}",
        id, race_pars.no_competitors, race_pars.total_distance
    );
    Ok(id)
}

/// update_race puts an existing race back into its created state, optionally with a new number
/// of competitors and a new distance, and returns the updated race.
pub fn update_race<R: Rng + ?Sized>(
    store: &mut dyn RaceStore,
    id: u32,
    input: &RaceParsInput,
    rng: &mut R,
) -> Result<Race, RaceError> {
    let mut race = store.get(id)?;
    race.reset(input, rng);
    store.update(id, &race)?;

    info!("Updated race {}", id);
    Ok(race)
}

/// simulate_race simulates a race tick by tick until a winner is decided and returns the
/// history and the winner. Depending on persist_mode, the race is written to the store after
/// every tick or once at the end. If the race is already finished, the stored result is returned
/// without simulating again.
pub fn simulate_race(
    store: &mut dyn RaceStore,
    id: u32,
    persist_mode: PersistMode,
) -> Result<RaceResult, RaceError> {
    let mut race = store.get(id)?;

    if race.is_finished() {
        return match race.winner {
            Some(winner) => Ok(RaceResult {
                already_finished: true,
                history: race.history,
                winner,
            }),
            None => Err(RaceError::Store(anyhow!(
                "Race {} is marked as finished but has no winner!",
                id
            ))),
        };
    }

    if !race.can_finish() {
        return Err(RaceError::Unfinishable(id));
    }

    // simulate the race -> execute ticks until a winner is decided
    while !race.is_finished() {
        race.simulate_tick();
        debug!("Race {}: simulated tick {}", id, race.cur_tick());

        if persist_mode == PersistMode::EveryTick {
            store.update(id, &race)?;
        }
    }

    if persist_mode == PersistMode::OnFinish {
        store.update(id, &race)?;
    }

    let winner = race
        .winner
        .ok_or_else(|| anyhow!("Race {} finished without a winner!", id))?;

    info!(
        "Race {} finished after {} ticks, winner is competitor {}",
        id, winner.total_ticks, winner.id
    );

    Ok(RaceResult {
        already_finished: false,
        history: race.history,
        winner,
    })
}

pub fn get_race(store: &dyn RaceStore, id: u32) -> Result<Race, RaceError> {
    store.get(id)
}

pub fn list_races(store: &dyn RaceStore) -> Result<Vec<Race>, RaceError> {
    store.list()
}

pub fn delete_race(store: &mut dyn RaceStore, id: u32) -> Result<(), RaceError> {
    store.delete(id)?;
    info!("Deleted race {}", id);
    Ok(())
}
