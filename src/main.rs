//! Gravity Hopper headless demo
//!
//! Runs the simulation without a renderer: a small autoplay policy picks each
//! jump by trial simulation and the loop logs each level's outcome. Doubles as
//! an end-to-end smoke run for the core.

use glam::Vec2;
use gravity_hopper::consts::SIM_DT;
use gravity_hopper::sim::{
    JumpBudget, LevelOutcome, LevelSession, PlayerState, TickInput, advance, jump, resolve, tick,
};
use gravity_hopper::tuning::Tuning;

/// Give up on a level attempt after this much simulated time
const MAX_TICKS_PER_ATTEMPT: u64 = 60 * 60;
const MAX_ATTEMPTS_PER_LEVEL: u32 = 5;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let levels = arg_value(&args, "--levels")
        .and_then(|v| v.parse().ok())
        .unwrap_or(5u32);
    let seed = arg_value(&args, "--seed")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0xC0FFEEu64);
    let tuning = match arg_value(&args, "--tuning") {
        Some(path) => match load_tuning(path) {
            Ok(t) => t,
            Err(err) => {
                log::error!("failed to load tuning from {path}: {err}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("autoplay: {levels} levels, seed {seed:#x}");

    let mut session = LevelSession::new(1, seed, tuning);
    let mut attempts = 1u32;

    while session.level_index <= levels {
        let outcome = play_attempt(&mut session, attempts);
        match outcome {
            LevelOutcome::Victory { jumps_used } => {
                log::info!(
                    "level {} cleared in {jumps_used} jumps ({} ticks)",
                    session.level_index,
                    session.time_ticks
                );
                if session.level_index == levels {
                    break;
                }
                session.advance_level();
                attempts = 1;
            }
            _ => {
                log::warn!(
                    "level {} attempt {attempts} failed: {outcome:?}",
                    session.level_index
                );
                if attempts >= MAX_ATTEMPTS_PER_LEVEL {
                    log::error!("giving up on level {}", session.level_index);
                    std::process::exit(2);
                }
                attempts += 1;
                session.restart();
            }
        }
    }

    log::info!("autoplay finished");
}

/// Run one level attempt to a terminal outcome or the tick cap.
fn play_attempt(session: &mut LevelSession, attempt: u32) -> LevelOutcome {
    let start_ticks = session.time_ticks;

    loop {
        let jump_target = if !session.player.is_jumping && !session.budget.exhausted() {
            plan_jump(session, attempt)
        } else {
            None
        };
        let input = TickInput {
            jump_target,
            restart: false,
        };

        let outcome = tick(session, &input, SIM_DT);
        if outcome.is_terminal() {
            return outcome;
        }
        if session.time_ticks - start_ticks > MAX_TICKS_PER_ATTEMPT {
            log::warn!("level {} attempt timed out", session.level_index);
            return outcome;
        }
    }
}

/// Directions tried per planning step
const CANDIDATE_DIRECTIONS: u32 = 64;

/// Pick the next jump by trial simulation.
///
/// Trials run against the pure `advance`/`resolve` functions, so planning never
/// touches the live session or its logs. A direction that wins outright is
/// taken immediately; a direction that lands on an intermediate body is scored
/// by the best second jump available from that landing, so multi-hop routes
/// the goal's distance alone would rule out are still found. Candidates that
/// never come to rest are dropped: committing to one would stall the real
/// attempt exactly the way the trial did. Each retry rotates the candidate fan
/// slightly so a failed attempt does not replay the identical plan.
fn plan_jump(session: &LevelSession, attempt: u32) -> Option<Vec2> {
    let goal_pos = session.bodies.goal().pos;
    let phase = (attempt - 1) as f32 * std::f32::consts::TAU
        / (CANDIDATE_DIRECTIONS * MAX_ATTEMPTS_PER_LEVEL) as f32;
    let mut best: Option<(f32, Vec2)> = None;

    for target in candidate_targets(session.player.pos, phase) {
        let Ok((player, budget)) = jump(&session.player, target, &session.budget, &session.tuning)
        else {
            continue;
        };
        let (player, outcome) = fly_until_settled(player, &budget, session);
        match outcome {
            LevelOutcome::Victory { .. } => return Some(target),
            LevelOutcome::Defeat { .. } => continue,
            LevelOutcome::InProgress => {
                if player.is_jumping {
                    continue;
                }
                let dist = best_followup_distance(&player, &budget, session, goal_pos, phase);
                if best.is_none_or(|(d, _)| dist < d) {
                    best = Some((dist, target));
                }
            }
        }
    }

    Some(best.map_or(goal_pos, |(_, target)| target))
}

/// Score a landing spot by the closest approach to the goal one more jump can
/// reach from it. A follow-up that wins outright scores zero.
fn best_followup_distance(
    player: &PlayerState,
    budget: &JumpBudget,
    session: &LevelSession,
    goal_pos: Vec2,
    phase: f32,
) -> f32 {
    let mut best = player.pos.distance(goal_pos);

    for target in candidate_targets(player.pos, phase) {
        let Ok((p, b)) = jump(player, target, budget, &session.tuning) else {
            continue;
        };
        let (p, outcome) = fly_until_settled(p, &b, session);
        match outcome {
            LevelOutcome::Victory { .. } => return 0.0,
            LevelOutcome::InProgress if !p.is_jumping => {
                best = best.min(p.pos.distance(goal_pos));
            }
            _ => {}
        }
    }

    best
}

/// Integrate a trial flight until it lands, ends the level, or stalls.
fn fly_until_settled(
    mut player: PlayerState,
    budget: &JumpBudget,
    session: &LevelSession,
) -> (PlayerState, LevelOutcome) {
    let bounds = session.loss_bounds();
    let mut outcome = LevelOutcome::InProgress;

    for _ in 0..MAX_TICKS_PER_ATTEMPT {
        player = advance(&player, &session.bodies, SIM_DT, &session.tuning);
        let (next, next_outcome) = resolve(player, &session.bodies, budget, bounds);
        player = next;
        outcome = next_outcome;
        if outcome.is_terminal() || !player.is_jumping {
            break;
        }
        // Damping has bled the flight dry; it will never land
        if player.vel.length_squared() < 1e-4 {
            break;
        }
    }

    (player, outcome)
}

fn candidate_targets(from: Vec2, phase: f32) -> impl Iterator<Item = Vec2> {
    (0..CANDIDATE_DIRECTIONS).map(move |i| {
        let theta = phase + std::f32::consts::TAU * i as f32 / CANDIDATE_DIRECTIONS as f32;
        from + Vec2::from_angle(theta) * 100.0
    })
}

fn load_tuning(path: &str) -> Result<Tuning, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
