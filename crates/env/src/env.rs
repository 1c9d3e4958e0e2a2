/// Interface between an episode runner and a task.
///
/// Follows the familiar gym shape: `step` consumes one actuator command
/// and yields the next observation vector, a scalar reward and a flag
/// marking the end of the episode; `reset` starts a fresh one.
pub trait Env {
    /// Actuator command consumed by one call to [`Env::step`].
    type Action;

    /// Advance the environment by one action.
    ///
    /// Returns `(obs, reward, done)`. After `done` comes back `true` the
    /// caller is expected to `reset`, though stepping on is not an error.
    fn step(&mut self, action: Self::Action) -> (Vec<f32>, f32, bool);

    /// Begin a new episode and return the initial observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Length of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of components in one action.
    fn action_size(&self) -> usize;
}
