#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use env::{Env, HoverTask, TaskConfig};
use sim::SimConfig;

/// Rotor command a notch above the point-mass hover point, so the demo
/// always climbs toward the target.
const BASE_COMMAND: f32 = 520.0;
/// Half-width of the uniform jitter applied to each rotor command.
const COMMAND_JITTER: f32 = 25.0;
const EPISODES: u32 = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    fastrand::seed(7);

    let mut task = HoverTask::point_mass(SimConfig::default(), TaskConfig::default())?;
    tracing::info!(
        "Hover task ready: state_size = {}, action_size = {}, target = {:?}",
        task.state_size,
        task.action_size,
        task.target_pos
    );

    for episode in 1..=EPISODES {
        let mut state = task.reset();
        // state[14] is z of the newest pose snapshot.
        tracing::debug!("Episode {episode} start: altitude {:.2} m", state[14]);
        let mut total_reward = 0.0_f32;
        let mut steps = 0_u32;

        loop {
            let mut action = [BASE_COMMAND; 4];
            for command in &mut action {
                *command += (fastrand::f32() - 0.5) * 2.0 * COMMAND_JITTER;
            }

            let (next_state, reward, done) = task.step(action);
            state = next_state;
            total_reward += reward;
            steps += 1;

            if steps % 25 == 0 {
                tracing::info!("Episode {episode}, step {steps}: altitude {:.2} m", state[14]);
            }
            if done {
                break;
            }
        }

        tracing::info!(
            "Episode {episode} finished after {steps} steps: total reward {total_reward:.3}, final altitude {:.2} m",
            state[14]
        );
    }

    Ok(())
}
